//! ASCII banner with gradient (CIKI DA RAINO).
//!
//! Figlet standard font, coral-to-sky gradient matching the app palette.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Accent Coral (#ff6b81).
const ACCENT_CORAL: (u8, u8, u8) = (0xff, 0x6b, 0x81);
/// Sky Blue (#00aeef), the progress-bar color of the original app.
const SKY_BLUE: (u8, u8, u8) = (0x00, 0xae, 0xef);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "RAINO" in figlet with a coral-to-sky gradient,
/// then the full app name and version.
pub fn print_welcome() {
    let mut out = stdout();
    let font = FIGfont::standard().expect("figlet standard font");
    let figure = font.convert("RAINO").expect("figlet convert RAINO");
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(ACCENT_CORAL, SKY_BLUE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: SKY_BLUE.0,
        g: SKY_BLUE.1,
        b: SKY_BLUE.2,
    }));
    let _ = out.execute(Print(format!("Ciki da Raino v{}\r\n", version)));
    let _ = out.execute(Print("Mataimakin ciki da kula da jariri a cikin Hausa\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
