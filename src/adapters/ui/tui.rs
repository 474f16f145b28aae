//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> tracker / ovulation / articles / chat / theme. All Hausa
//! user-facing text; validation errors print their message and re-prompt.

use crate::domain::gestation::parse_date;
use crate::domain::responder::{self, SAMPLE_QUESTIONS};
use crate::domain::{
    ArticleCategory, CalculationKind, ChatTurn, DomainError, FertileWindow, PregnancyResult,
    Sender,
};
use crate::ports::{ClockPort, InputPort};
use crate::usecases::{ArticleService, ChatService, PrefsService, TrackerService};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use indicatif::ProgressBar;
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Width of the textual progress bar on the tracker results screen.
const PROGRESS_BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Tracker,
    Ovulation,
    Articles,
    Chat,
    Theme,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Tracker => "🤰 Bibiyar Ciki",
            MenuItem::Ovulation => "📅 Lissafin Ovulation",
            MenuItem::Articles => "📚 Labarai",
            MenuItem::Chat => "💬 Tattaunawa",
            MenuItem::Theme => "🌓 Canza Yanayi",
            MenuItem::Quit => "🚪 Fita",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindChoice {
    Lmp,
    Edd,
}

impl fmt::Display for KindChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KindChoice::Lmp => "Ranar haila ta ƙarshe (LMP)",
            KindChoice::Edd => "Ranar haihuwar da ake tsammani (EDD)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryChoice {
    All,
    One(ArticleCategory),
    Back,
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryChoice::All => f.write_str("Duka Labarai"),
            CategoryChoice::One(category) => f.write_str(category.display()),
            CategoryChoice::Back => f.write_str("← Komawa"),
        }
    }
}

/// TUI adapter. Inquire prompts over the use-case services.
pub struct TuiInputPort {
    tracker: Arc<TrackerService>,
    chat: Arc<ChatService>,
    articles: Arc<ArticleService>,
    prefs: Arc<PrefsService>,
    clock: Arc<dyn ClockPort>,
    calc_delay: Duration,
    typing_delay: Duration,
}

impl TuiInputPort {
    pub fn new(
        tracker: Arc<TrackerService>,
        chat: Arc<ChatService>,
        articles: Arc<ArticleService>,
        prefs: Arc<PrefsService>,
        clock: Arc<dyn ClockPort>,
        calc_delay: Duration,
        typing_delay: Duration,
    ) -> Self {
        Self {
            tracker,
            chat,
            articles,
            prefs,
            clock,
            calc_delay,
            typing_delay,
        }
    }

    // ── Tracker ──────────────────────────────────────────────────────────

    async fn run_tracker(&self) -> Result<(), DomainError> {
        let Some(kind) = prompt_opt(
            Select::new(
                "Ta yaya za a lissafa?",
                vec![KindChoice::Lmp, KindChoice::Edd],
            )
            .prompt(),
        )?
        else {
            return Ok(());
        };

        // Prefill from the saved snapshot when it matches the chosen mode.
        let snapshot = self.tracker.load_snapshot().await?;
        let initial = snapshot.and_then(|s| match kind {
            KindChoice::Lmp => s.lmp_date,
            KindChoice::Edd => s.edd_date,
        });

        let message = match kind {
            KindChoice::Lmp => "Ranar haila ta ƙarshe (YYYY-MM-DD):",
            KindChoice::Edd => "Ranar haihuwa (YYYY-MM-DD):",
        };
        let prompted = {
            let mut prompt = Text::new(message);
            let initial_str = initial.map(|d| d.to_string());
            if let Some(ref s) = initial_str {
                prompt = prompt.with_initial_value(s);
            }
            prompt.prompt()
        };
        let Some(raw) = prompt_opt(prompted)? else {
            return Ok(());
        };

        let date = match report(parse_date(&raw))? {
            Some(date) => date,
            None => return Ok(()),
        };

        let computed = match kind {
            KindChoice::Lmp => self.tracker.track_from_lmp(date),
            KindChoice::Edd => self.tracker.track_from_edd(date),
        };
        let Some(result) = report(computed)? else {
            return Ok(());
        };

        self.pause_with_spinner("Ana lissafawa...", self.calc_delay)
            .await;
        render_pregnancy(&result);

        let save = prompt_opt(
            Confirm::new("Ajiye bayanin ciki?")
                .with_default(true)
                .prompt(),
        )?
        .unwrap_or(false);
        if save {
            let calc_kind = match kind {
                KindChoice::Lmp => CalculationKind::Lmp,
                KindChoice::Edd => CalculationKind::Edd,
            };
            self.tracker.save_snapshot(calc_kind, date).await?;
            println!("✓ Bayanin ciki an ajiye shi cikin nasara!");
        }
        Ok(())
    }

    // ── Ovulation ────────────────────────────────────────────────────────

    async fn run_ovulation(&self) -> Result<(), DomainError> {
        // Default LMP two weeks back, like the original form.
        let default_lmp = (self.clock.today() - Days::new(14)).to_string();
        let Some(raw) = prompt_opt(
            Text::new("Ranar haila ta ƙarshe (YYYY-MM-DD):")
                .with_initial_value(&default_lmp)
                .prompt(),
        )?
        else {
            return Ok(());
        };
        let lmp = match report(parse_date(&raw))? {
            Some(date) => date,
            None => return Ok(()),
        };

        let Some(cycle) = prompt_opt(
            CustomType::<u32>::new("Tsawon lokacin haila (kwanaki):")
                .with_default(28)
                .with_error_message("Shigar da lamba")
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let Some(window) = report(self.tracker.fertile_window(lmp, cycle))? else {
            return Ok(());
        };

        self.pause_with_spinner("Ana lissafawa...", self.calc_delay)
            .await;
        render_fertile_window(lmp, &window);
        Ok(())
    }

    // ── Articles ─────────────────────────────────────────────────────────

    async fn run_articles(&self) -> Result<(), DomainError> {
        loop {
            let mut choices = vec![CategoryChoice::All];
            choices.extend(ArticleCategory::ALL.map(CategoryChoice::One));
            choices.push(CategoryChoice::Back);

            let Some(choice) = prompt_opt(Select::new("Rukunin labarai:", choices).prompt())?
            else {
                return Ok(());
            };
            let category = match choice {
                CategoryChoice::All => None,
                CategoryChoice::One(category) => Some(category),
                CategoryChoice::Back => return Ok(()),
            };

            let search = prompt_opt(
                Text::new("Nemo labari (bar fanko don duka):")
                    .with_default("")
                    .prompt(),
            )?
            .unwrap_or_default();

            let articles = self.articles.list(category, &search);
            println!(
                "\n{} — {} labar{}",
                self.articles.section_title(category),
                articles.len(),
                if articles.len() == 1 { "i" } else { "ai" }
            );
            if articles.is_empty() {
                println!("Babu labarai a wannan rukunin.\n");
                continue;
            }

            let titles: Vec<String> = articles
                .iter()
                .map(|a| format!("{} {}", a.icon, a.title))
                .collect();
            let Some(picked) = prompt_opt(Select::new("Zaɓi labari:", titles).prompt())? else {
                continue;
            };
            if let Some(article) = articles
                .iter()
                .find(|a| picked == format!("{} {}", a.icon, a.title))
            {
                println!("\n{} {}", article.icon, article.title);
                println!(
                    "{} | 📅 {} | ⏱️ {}\n",
                    article.category.display(),
                    article.date,
                    article.read_time
                );
                println!("{}\n", article.content);
            }
        }
    }

    // ── Chat ─────────────────────────────────────────────────────────────

    async fn run_chat(&self) -> Result<(), DomainError> {
        for turn in self.chat.history().await? {
            render_turn(&turn);
        }
        if let Some(welcome) = self.chat.ensure_welcome().await? {
            self.pause_with_spinner("...", self.typing_delay).await;
            render_turn(&welcome);
        }

        loop {
            let mut options = vec!["✍ Rubuta tambaya".to_string()];
            options.extend(SAMPLE_QUESTIONS.iter().map(|q| format!("💡 {q}")));
            options.push("🧹 Share tattaunawar".to_string());
            options.push("← Komawa".to_string());

            let Some(choice) = prompt_opt(Select::new("Tattaunawa:", options).prompt())? else {
                return Ok(());
            };

            match choice.as_str() {
                "✍ Rubuta tambaya" => {
                    let Some(text) = prompt_opt(Text::new("Kai:").prompt())? else {
                        continue;
                    };
                    if text.trim().is_empty() {
                        println!("Da fatan za a rubuta wani abu");
                        continue;
                    }
                    self.exchange(&text).await?;
                }
                "🧹 Share tattaunawar" => {
                    let confirmed = prompt_opt(
                        Confirm::new("Kuna da tabbacin share duk tattaunawar?")
                            .with_default(false)
                            .prompt(),
                    )?
                    .unwrap_or(false);
                    if !confirmed {
                        continue;
                    }
                    if self.chat.clear().await? {
                        println!("An share tattaunawar");
                    } else {
                        println!("Babu tattaunawar da za a share");
                    }
                }
                "← Komawa" => return Ok(()),
                chip => {
                    let question = chip.trim_start_matches("💡 ");
                    self.exchange(question).await?;
                }
            }
        }
    }

    /// One user/bot exchange: record, simulate typing, render.
    async fn exchange(&self, text: &str) -> Result<(), DomainError> {
        let (user_turn, bot_turn, reply) = self.chat.send(text).await?;
        render_turn(&user_turn);
        self.pause_with_spinner("...", self.typing_delay).await;
        render_turn(&bot_turn);
        println!(
            "(An ba da amsa game da {})\n",
            responder::category_display(reply.category)
        );
        Ok(())
    }

    // ── Theme ────────────────────────────────────────────────────────────

    async fn run_theme_toggle(&self) -> Result<(), DomainError> {
        let theme = self.prefs.toggle_theme().await?;
        super::apply_theme(theme);
        println!("{}", theme.display());
        Ok(())
    }

    /// Cosmetic pause with a spinner. Timing only; no correctness weight.
    async fn pause_with_spinner(&self, message: &str, delay: Duration) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        tokio::time::sleep(delay).await;
        spinner.finish_and_clear();
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let theme = self.prefs.theme().await?;
        super::apply_theme(theme);

        loop {
            let items = vec![
                MenuItem::Tracker,
                MenuItem::Ovulation,
                MenuItem::Articles,
                MenuItem::Chat,
                MenuItem::Theme,
                MenuItem::Quit,
            ];
            let Some(item) = prompt_opt(Select::new("Me kuke bukata?", items).prompt())? else {
                return Ok(());
            };

            match item {
                MenuItem::Tracker => self.run_tracker().await?,
                MenuItem::Ovulation => self.run_ovulation().await?,
                MenuItem::Articles => self.run_articles().await?,
                MenuItem::Chat => self.run_chat().await?,
                MenuItem::Theme => self.run_theme_toggle().await?,
                MenuItem::Quit => return Ok(()),
            }
        }
    }
}

/// Esc/Ctrl-C backs out of the current prompt; other prompt failures are real
/// errors.
fn prompt_opt<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Prompt(e.to_string())),
    }
}

/// Print a validation error and continue; infrastructure errors propagate.
fn report<T>(result: Result<T, DomainError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ (DomainError::Store(_) | DomainError::Prompt(_))) => Err(e),
        Err(e) => {
            println!("⚠ {e}");
            Ok(None)
        }
    }
}

fn render_pregnancy(result: &PregnancyResult) {
    println!("\n── Sakamakon Bibiyar Ciki ──────────────────");
    println!(
        "  Mako: {} da kwana {}",
        result.gestational_weeks, result.gestational_day_of_week
    );
    println!("  Girman jariri: {}", result.baby_size);
    println!("  Ranar Haihuwa: {}", result.edd);
    println!(
        "  Saura makonni: {} (kwanaki {})",
        result.weeks_remaining, result.days_remaining
    );
    println!("  Wata: {} (Ki ke a yanzu)", result.lunar_month);
    println!("  Trimester: {}", result.trimester.display());
    println!("  {}", progress_bar(result.progress_percent));
    println!("────────────────────────────────────────────\n");
}

fn render_fertile_window(lmp: NaiveDate, window: &FertileWindow) {
    println!("\n── Sakamakon Lissafin Ovulation ────────────");
    println!("  Ranar Ovulation: {}", window.ovulation_day);
    println!(
        "  Lokacin ɗaukar ciki: {} - {}",
        window.fertile_start, window.fertile_end
    );
    println!(
        "  Lokacin kariya: {} - {}",
        window.safe_window_start, window.safe_window_end
    );
    println!(
        "  Lissafi daga {} zuwa {}",
        lmp, window.ovulation_day
    );
    println!("────────────────────────────────────────────\n");
}

fn render_turn(turn: &ChatTurn) {
    let avatar = match turn.sender {
        Sender::User => "👤",
        Sender::Bot => "🤖",
    };
    println!("[{}] {} {}", turn.time, avatar, turn.text);
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0), format!("[{}] 0%", "░".repeat(30)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "█".repeat(30)));
        assert!(progress_bar(33).contains("33%"));
    }
}
