//! Rule-based chat responder. Ordered substring-trigger lookup, not NLP.
//!
//! Match order is semantically load-bearing: topic keys are checked first in
//! definition order, then the keyword fallback list in its definition order,
//! first hit wins. Overlapping substrings (e.g. "ciki" inside "alamun ciki")
//! make reordering behavior-changing, so both lists are explicit slices.
//! Matching is exact-substring, deliberately not word-boundary.

/// One canned Q&A topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Trigger phrase, lowercase.
    pub key: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

/// Selected response. Never absent: a miss returns the default entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotReply {
    pub answer: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

const ALAMUN_CIKI: KnowledgeEntry = KnowledgeEntry {
    key: "alamun ciki",
    question: "Menene alamun farko na ciki?",
    answer: "Alamun farko na ciki sun haɗa da:\n\n\
1. Jinkirin haila: Mafi muhimmanci alama\n\
2. Ƙwayoyin nono masu zafi ko girma\n\
3. Gajiya mai yawa ba tare da dalili ba\n\
4. Ƙaiƙayi da amai (morning sickness)\n\
5. Sauyin sha'awar abinci (cravings)\n\
6. Motsin zuciya (nausea)\n\
7. Yawan fitsari\n\
8. Zazzabi ko zafi a jiki\n\n\
Alamun na iya bambanta daga mace zuwa mace. Idan kun ga waɗannan alamai, yi gwajin ciki.",
    category: "ciki",
    tags: &["alamu", "farko", "symptoms"],
};

const ABINCI: KnowledgeEntry = KnowledgeEntry {
    key: "abinci mai gina jiki",
    question: "Menene abinci mai gina jiki ga uwa mai ciki?",
    answer: "Abinci mai gina jiki ga uwa mai ciki:\n\n\
🍎 'Ya'yan itatuwa da kayan lambu: Rufe launi daban-daban (kore, ja, orange, purple)\n\
🥚 Furotin: Kifi, nama, kwai, wake, soyayyen abinci\n\
🥛 Calcium: Madara, cuku, yogurt, da kifi masu ƙashi\n\
🌾 Carbohydrates masu lafiya: Shinkafa, alkama, masara, dawa\n\
🥑 Mai masu lafiya: Avocado, man gyada, man zaitun\n\
💧 Ruwa: A sha aƙalla lita 8-10 a rana\n\n\
Muhimman abubuwan gina jiki:\n\
• Folic acid (ganye kore, wake)\n\
• Ƙarfe (nama, kifi, 'ya'yan itatuwa)\n\
• Calcium (madara, cuku)\n\
• Vitamin D (hasken rana, kifi)",
    category: "abinci",
    tags: &["nutrition", "gina jiki", "abinci"],
};

const RUWA: KnowledgeEntry = KnowledgeEntry {
    key: "ruwa a ciki",
    question: "Yaya zan sha ruwa yayin ciki?",
    answer: "Yayin ciki, ruwa yana da muhimmanci sosai:\n\n\
💧 Yawan ruwa: A sha aƙalla lita 8-10 a rana (ko fiye idan yana zafi)\n\
🕒 Lokaci: Sha ƙarami akai-akai a tsawon rana\n\
🚰 Nau'in ruwa: Ruwan sanyi ya fi dacewa, ruwan dafaffe ma yana da kyau\n\
🍵 Madadin: Shan shayi mara caffeine, ruwan 'ya'yan itatuwa (lemun tsami, lemo)\n\n\
Fa'idodin ruwa yayin ciki:\n\
• Yana taimakawa haɓakar mahaifa\n\
• Yana rage gajiya\n\
• Yana hana constipation\n\
• Yana kula da yawan ruwa a jiki\n\
• Yana taimakawa cikin daukar sinadirai",
    category: "lafiya",
    tags: &["ruwa", "hydration", "lafiya"],
};

const DEFAULT: KnowledgeEntry = KnowledgeEntry {
    key: "default",
    question: "Na gane tambayar ku",
    answer: "Na gane tambayar ku. Duk da haka, ina ba ku shawarar tuntubar likita ko \
kwararre don amsa mafi inganci.\n\n\
Za ku iya tambaya game da:\n\
• Alamun ciki da lafiyar uwa\n\
• Abinci mai gina jiki\n\
• Shirye-shiryen haihuwa\n\
• Kula da jariri\n\
• Lafiyar bayan haihuwa\n\
• Cututtukan ciki\n\n\
Ku ci gaba da tambayar ku a cikin Hausa, zan iya taimaka muku da shawarwari na gabaɗaya.",
    category: "general",
    tags: &["help", "general"],
};

/// Topic entries, matched before the keyword fallback. Definition order.
pub const TOPICS: [&KnowledgeEntry; 3] = [&ALAMUN_CIKI, &ABINCI, &RUWA];

/// Keyword fallback, checked after the topics. Definition order; a keyword maps
/// onto one of the topic entries.
pub const KEYWORDS: [(&str, &KnowledgeEntry); 15] = [
    ("ciki", &ALAMUN_CIKI),
    ("alamu", &ALAMUN_CIKI),
    ("abinci", &ABINCI),
    ("nutrition", &ABINCI),
    ("ruwa", &RUWA),
    ("water", &RUWA),
    ("haihuwa", &ALAMUN_CIKI),
    ("labor", &ALAMUN_CIKI),
    ("jariri", &ABINCI),
    ("baby", &ABINCI),
    ("cutar", &ALAMUN_CIKI),
    ("complication", &ALAMUN_CIKI),
    ("motsa jiki", &ALAMUN_CIKI),
    ("exercise", &ALAMUN_CIKI),
    ("fitness", &ALAMUN_CIKI),
];

/// Suggested questions shown as quick chips in the chat screen.
pub const SAMPLE_QUESTIONS: [&str; 6] = [
    "Menene alamun farko na ciki?",
    "Menene abinci mai gina jiki ga uwa mai ciki?",
    "Yaya zan sha ruwa yayin ciki?",
    "Menene alamun haihuwa?",
    "Yaya zan kula da jariri bayan haihuwa?",
    "Shin zan iya yi motsa jiki yayin ciki?",
];

/// Hausa display name for a reply category, shown in the confirmation line.
pub fn category_display(category: &str) -> &str {
    match category {
        "ciki" => "Alamun Ciki",
        "abinci" => "Abinci Mai Gina Jiki",
        "lafiya" => "Lafiya",
        "haihuwa" => "Haihuwa",
        "jariri" => "Kula da Jariri",
        "general" => "Gabaɗaya",
        other => other,
    }
}

/// Select the canned answer for free-form user text. Total: a miss is the
/// default branch, not an error.
pub fn select_response(user_text: &str) -> BotReply {
    let normalized = user_text.trim().to_lowercase();

    let entry = TOPICS
        .iter()
        .copied()
        .find(|topic| normalized.contains(topic.key))
        .or_else(|| {
            KEYWORDS
                .iter()
                .find(|(keyword, _)| normalized.contains(keyword))
                .map(|(_, entry)| *entry)
        })
        .unwrap_or(&DEFAULT);

    BotReply {
        answer: entry.answer,
        category: entry.category,
        tags: entry.tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_inside_sentence() {
        // "ciki" keyword must fire before falling through to the default.
        let reply = select_response("ina jin zafi a ciki");
        assert_eq!(reply.category, "ciki");
        assert_eq!(reply.answer, ALAMUN_CIKI.answer);
    }

    #[test]
    fn test_no_keyword_falls_back_to_default() {
        let reply = select_response("xyz123");
        assert_eq!(reply.category, "general");
        assert_eq!(reply.answer, DEFAULT.answer);
    }

    #[test]
    fn test_topic_phrase_beats_keyword() {
        // "ruwa a ciki" contains both the "ciki" keyword and the full topic
        // phrase; the topic pass runs first.
        let reply = select_response("yaya ake shan ruwa a ciki?");
        assert_eq!(reply.category, "lafiya");
    }

    #[test]
    fn test_keyword_order_is_definition_order() {
        // "abinci" and "ruwa" both present: "abinci" is earlier in the list.
        let reply = select_response("abinci da ruwa");
        assert_eq!(reply.category, "abinci");
    }

    #[test]
    fn test_normalization_uppercase_and_whitespace() {
        let reply = select_response("  ALAMUN CIKI  ");
        assert_eq!(reply.category, "ciki");
    }

    #[test]
    fn test_substring_match_is_not_word_bounded() {
        // Source behavior preserved: a short key embedded in a longer word
        // still matches.
        let reply = select_response("hakikanin");
        assert_eq!(reply.category, "general"); // no key embedded here
        let reply = select_response("ruwansu");
        assert_eq!(reply.category, "lafiya"); // "ruwa" embedded
    }

    #[test]
    fn test_deterministic_across_calls() {
        let a = select_response("ina jin zafi a ciki");
        let b = select_response("ina jin zafi a ciki");
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_sample_question_gets_a_topic_answer() {
        for question in SAMPLE_QUESTIONS {
            let reply = select_response(question);
            assert_ne!(reply.category, "general", "question: {question}");
        }
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(category_display("ciki"), "Alamun Ciki");
        assert_eq!(category_display("general"), "Gabaɗaya");
        assert_eq!(category_display("unknown"), "unknown");
    }
}
