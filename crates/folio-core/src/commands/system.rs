//! Screen, animation, time, theme and echo commands.

use chrono::Local;

use super::{CommandEnv, CommandSpec, head, is};
use crate::config::speed;
use crate::models::{OutputBuffer, OutputLine, Theme};
use crate::utils::skip_chars;

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "clear",
            description: "clear the terminal",
            matches: |input| matches!(super::normalized(input).as_str(), "clear" | "exit" | "cls"),
            execute: clear,
        },
        CommandSpec {
            name: "start",
            description: "show the start message",
            matches: |input| is(input, "start"),
            execute: start,
        },
        CommandSpec {
            name: "stop",
            description: "stop the running animation",
            matches: |input| is(input, "stop"),
            execute: stop,
        },
        CommandSpec {
            name: "time",
            description: "display the local time",
            matches: |input| is(input, "time"),
            execute: time,
        },
        CommandSpec {
            name: "theme",
            description: "change the colour theme",
            matches: |input| head(input, 5) == "theme",
            execute: theme,
        },
        CommandSpec {
            name: "echo",
            description: "echo the following string",
            matches: |input| head(input, 4) == "echo",
            execute: echo,
        },
    ]
}

fn clear(_input: &str, out: &mut OutputBuffer, _env: &mut CommandEnv<'_>) {
    out.clear();
}

fn start(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let services = env.services;
    if let Some(lines) = services.content.content("start") {
        services.typewriter.reveal(lines, speed::FAST);
    }
    out.clear();
}

fn stop(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    env.services.typewriter.stop();
    out.push(OutputLine::info("animation stopped"));
}

fn time(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let now = env.services.clock.now().with_timezone(&Local);
    out.push(OutputLine::text(now.format("%H:%M:%S").to_string()));
}

fn theme(input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let name = skip_chars(input, 5).trim();
    if name.is_empty() {
        out.push(OutputLine::error("theme: missing operand"));
        out.push(OutputLine::text(format!("available themes: {}", Theme::catalog())));
        return;
    }

    match name.parse::<Theme>() {
        Ok(theme) => {
            env.session.theme = theme;
            out.push(OutputLine::text(format!("theme set to {theme}")));
        }
        Err(_) => {
            out.push(OutputLine::error(format!("theme: {name}: invalid theme")));
            out.push(OutputLine::text(format!("available themes: {}", Theme::catalog())));
        }
    }
}

fn echo(input: &str, out: &mut OutputBuffer, _env: &mut CommandEnv<'_>) {
    out.push(OutputLine::text(skip_chars(input, 5)));
}

#[cfg(test)]
mod tests {
    use crate::commands::tests::Harness;
    use crate::models::Theme;

    #[test]
    fn test_clear_aliases() {
        for alias in ["clear", "EXIT", " cls "] {
            let mut h = Harness::new();
            h.run("echo junk");
            h.run(alias);
            assert!(h.output().is_empty(), "{alias} should clear");
        }
    }

    #[test]
    fn test_echo_round_trip() {
        let mut h = Harness::new();
        for text in ["hello", "two  spaces", "MiXeD case!", "ünïcödé"] {
            h.run(&format!("echo {text}"));
            assert_eq!(h.take_output(), vec![text]);
        }
    }

    #[test]
    fn test_echo_without_text() {
        let mut h = Harness::new();
        h.run("echo");
        assert_eq!(h.output(), vec![""]);
    }

    #[test]
    fn test_theme_set() {
        let mut h = Harness::new();
        h.run("theme Nord");
        assert_eq!(h.session.theme, Theme::Nord);
        assert_eq!(h.output(), vec!["theme set to nord"]);
    }

    #[test]
    fn test_theme_missing_and_invalid() {
        let mut h = Harness::new();
        h.run("theme");
        assert_eq!(
            h.take_output(),
            vec![
                "theme: missing operand",
                "available themes: dark, light, dracula, nord, monokai, solarized-dark, gruvbox",
            ]
        );
        h.run("theme neon");
        let lines = h.take_output();
        assert_eq!(lines[0], "theme: neon: invalid theme");
        assert_eq!(h.session.theme, Theme::Dark);
    }

    #[test]
    fn test_time_format() {
        let mut h = Harness::new();
        h.run("time");
        let line = &h.output()[0];
        assert_eq!(line.len(), 8);
        assert_eq!(line.chars().filter(|c| *c == ':').count(), 2);
    }

    #[test]
    fn test_start_reveals_and_clears() {
        let mut h = Harness::new();
        h.run("echo before");
        h.run("start");
        assert!(h.output().is_empty());
        assert!(h.services.typewriter.is_active());
        h.frames.run_until_idle(1.0, 10_000);
        assert!(h.display().iter().any(|l| l.contains("Welcome")));
    }

    #[test]
    fn test_stop_halts_animation() {
        let mut h = Harness::new();
        h.run("start");
        h.frames.advance(1.0);
        h.frames.advance(1.0);
        h.run("stop");
        assert!(!h.services.typewriter.is_active());
        assert_eq!(h.output(), vec!["animation stopped"]);
        assert_eq!(h.frames.pending(), 0);
    }
}
