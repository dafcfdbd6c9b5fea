//! Filesystem navigation: `ls`, `cd`, `cat`, `pwd`.

use super::{CommandEnv, CommandSpec, head, is, normalized};
use crate::config::{HOME_DIR, speed};
use crate::filesystem::{DirTable, join};
use crate::models::{OutputBuffer, OutputLine};
use crate::utils::{skip_chars, take_chars};

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "ls",
            description: "list contents of a directory",
            matches: |input| matches!(take_chars(&normalized(input), 2), "ls" | "ll" | "la"),
            execute: ls,
        },
        CommandSpec {
            name: "cd",
            description: "change directory",
            matches: |input| head(input, 2) == "cd",
            execute: cd,
        },
        CommandSpec {
            name: "cat",
            description: "show file contents",
            matches: |input| {
                let input = normalized(input);
                input.starts_with("cat") || input.starts_with("show")
            },
            execute: cat,
        },
        CommandSpec {
            name: "pwd",
            description: "print working directory",
            matches: |input| is(input, "pwd"),
            execute: pwd,
        },
    ]
}

fn ls(input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let arg = skip_chars(input.trim(), 2).trim();
    let fs = &env.services.fs;
    let target = DirTable::resolve(&env.session.cwd, arg);

    let Some(children) = fs.list_children(&target) else {
        let shown = if arg.is_empty() { "." } else { arg };
        out.push(OutputLine::error(format!(
            "ls: {shown}: no such file or directory"
        )));
        return;
    };

    out.push(OutputLine::text(format!("{target}/")));
    out.extend(
        children
            .iter()
            .map(|name| OutputLine::entry(name.as_str(), fs.file_kind(&target, name))),
    );
}

fn cd(input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let arg = skip_chars(input.trim(), 3).trim();
    let session = &mut *env.session;

    let target = match arg {
        "" | "." => return,
        ".." => {
            if session.cwd != HOME_DIR {
                session.cwd = HOME_DIR.to_string();
            }
            return;
        }
        _ if arg.starts_with(HOME_DIR) => arg.to_string(),
        _ => join(&session.cwd, arg),
    };

    if env.services.fs.is_directory(&target) {
        session.cwd = target;
    } else {
        out.push(OutputLine::error(format!(
            "cd: {arg}: no such file or directory"
        )));
    }
}

fn cat(input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let input = input.trim();
    let command_len = if normalized(input).starts_with("show") { 4 } else { 3 };
    let file = skip_chars(input, command_len).trim();

    if file.is_empty() {
        out.push(OutputLine::error("cat: missing operand"));
        out.push(OutputLine::text("usage: cat <file>"));
        return;
    }

    let services = env.services;
    let content = services
        .fs
        .child_exists(&env.session.cwd, file)
        .then(|| services.content.content(file))
        .flatten();

    match content {
        Some(lines) => {
            out.push(OutputLine::info(format!("displaying {file}...")));
            services.typewriter.reveal(lines, speed::NORMAL);
        }
        None => out.push(OutputLine::error(format!(
            "cat: {file}: No such file or directory"
        ))),
    }
}

fn pwd(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    out.push(OutputLine::text(env.session.cwd.clone()));
}
