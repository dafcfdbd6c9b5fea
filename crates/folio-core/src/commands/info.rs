//! Help, identity, prompt, history, manual pages and the project list.

use super::{CommandEnv, CommandSpec, head, is, normalized};
use crate::config::speed;
use crate::content::{PROJECTS, lookup_manual};
use crate::models::{OutputBuffer, OutputLine};
use crate::utils::skip_chars;

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "help",
            description: "display the help page",
            matches: |input| is(input, "help"),
            execute: help,
        },
        CommandSpec {
            name: "whoami",
            description: "print info about the site owner",
            matches: |input| is(input, "whoami"),
            execute: whoami,
        },
        CommandSpec {
            name: "ps",
            description: "set the prompt string",
            matches: |input| head(input, 2) == "ps",
            execute: ps,
        },
        CommandSpec {
            name: "history",
            description: "show command history",
            matches: |input| is(input, "history"),
            execute: history,
        },
        CommandSpec {
            name: "man",
            description: "show the manual page for a command",
            matches: |input| {
                let input = normalized(input);
                input == "man" || input.starts_with("man ")
            },
            execute: man,
        },
        CommandSpec {
            name: "projects",
            description: "list featured projects",
            matches: |input| is(input, "projects"),
            execute: projects,
        },
    ]
}

fn help(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    out.push(OutputLine::info("loading help..."));
    if let Some(lines) = env.services.content.content("help") {
        env.services.typewriter.reveal(lines, speed::MEDIUM);
    }
}

fn whoami(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    out.push(OutputLine::info("identifying..."));
    if let Some(lines) = env.services.content.content("whoami") {
        env.services.typewriter.reveal(lines, speed::NORMAL);
    }
}

fn ps(input: &str, _out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    env.session.set_prompt(skip_chars(input.trim(), 3));
}

fn history(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    if env.history.is_empty() {
        out.push(OutputLine::text("no command history"));
        return;
    }
    out.extend(
        env.history
            .iter()
            .enumerate()
            .map(|(i, line)| OutputLine::text(format!("  {}  {line}", i + 1))),
    );
}

fn man(input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let topic = skip_chars(input.trim(), 3).trim().to_lowercase();
    if topic.is_empty() {
        out.push(OutputLine::error("What manual page do you want?"));
        out.push(OutputLine::text("For example, try 'man man'."));
        return;
    }
    if let Some(page) = lookup_manual(&topic) {
        out.extend(page.render().into_iter().map(OutputLine::text));
        return;
    }

    // Aliases such as `exit` or `ll` resolve to the command that would run.
    let Some(spec) = env.commands.iter().find(|spec| (spec.matches)(&topic)) else {
        out.push(OutputLine::error(format!("No manual entry for {topic}")));
        return;
    };
    match lookup_manual(spec.name) {
        Some(page) => out.extend(page.render().into_iter().map(OutputLine::text)),
        None if !spec.description.is_empty() => {
            out.push(OutputLine::text(format!("{} - {}", spec.name, spec.description)));
        }
        None => out.push(OutputLine::error(format!("No manual entry for {topic}"))),
    }
}

fn projects(_input: &str, out: &mut OutputBuffer, _env: &mut CommandEnv<'_>) {
    out.push(OutputLine::text("Featured projects:"));
    out.push(OutputLine::empty());
    for (i, project) in PROJECTS.iter().enumerate() {
        out.push(OutputLine::text(format!(
            "{:>2}. {} - {}",
            i + 1,
            project.filename,
            project.name
        )));
        out.push(OutputLine::text(format!("    {}", project.summary)));
        out.push(OutputLine::text(format!("    {}", project.repo_url)));
    }
    out.push(OutputLine::empty());
    out.push(OutputLine::text(
        "Run 'cd ~/Applications' then 'cat <file>' for details.",
    ));
}
