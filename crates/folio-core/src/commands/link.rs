//! Commands that leave the terminal: external links and the mail client.

use super::{CommandEnv, CommandSpec, head, is};
use crate::config::{REACT_DOCS_URL, SOURCE_URL};
use crate::models::{OutputBuffer, OutputLine};
use crate::utils::skip_chars;

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "view-source",
            description: "navigate to this site's source",
            matches: |input| is(input, "view-source"),
            execute: view_source,
        },
        CommandSpec {
            name: "view-react-docs",
            description: "navigate to the react docs",
            matches: |input| is(input, "view-react-docs"),
            execute: view_react_docs,
        },
        CommandSpec {
            name: "hello there",
            description: "",
            matches: |input| is(input, "hello there"),
            execute: |_, out, _| out.push(OutputLine::text("General Kenobi...")),
        },
        CommandSpec {
            name: "ln",
            description: "open the link associated with a file",
            matches: |input| head(input, 2) == "ln",
            execute: ln,
        },
    ]
}

fn view_source(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    out.push(OutputLine::info("opening source code in new window..."));
    env.services.navigator.open_external(SOURCE_URL);
}

fn view_react_docs(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    out.push(OutputLine::info("opening react docs in new window..."));
    env.services.navigator.open_external(REACT_DOCS_URL);
}

fn ln(input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    let file = skip_chars(input.trim(), 3).trim();
    if file.is_empty() {
        out.push(OutputLine::error("ln: missing operand"));
        out.push(OutputLine::text("usage: ln <file>"));
        return;
    }

    let services = env.services;
    if !services.fs.child_exists(&env.session.cwd, file) {
        out.push(OutputLine::error(format!(
            "ln: {file}: no such file or directory"
        )));
        return;
    }

    match services.content.link(file) {
        Some(link) => match link.strip_prefix("mailto:") {
            Some(address) => {
                out.push(OutputLine::info("opening email client..."));
                services.navigator.open_mail(address);
            }
            None => {
                out.push(OutputLine::info("opening link in new window..."));
                services.navigator.open_external(&link);
            }
        },
        None => out.push(OutputLine::error(format!("ln: {file}: no associated link"))),
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::tests::Harness;
    use crate::config::SOURCE_URL;

    #[test]
    fn test_view_source() {
        let mut h = Harness::new();
        h.run("view-source");
        assert_eq!(h.output(), vec!["opening source code in new window..."]);
        assert_eq!(*h.navigator.opened.borrow(), vec![SOURCE_URL]);
    }

    #[test]
    fn test_hello_there() {
        let mut h = Harness::new();
        h.run("Hello There");
        assert_eq!(h.output(), vec!["General Kenobi..."]);
    }

    #[test]
    fn test_ln_mailto() {
        let mut h = Harness::new();
        h.run("cd Contact");
        h.run("ln gmail");
        assert_eq!(h.output(), vec!["opening email client..."]);
        assert_eq!(*h.navigator.mailed.borrow(), vec!["voigniersmith@gmail.com"]);
        assert!(h.navigator.opened.borrow().is_empty());
    }

    #[test]
    fn test_ln_external() {
        let mut h = Harness::new();
        h.run("cd Applications");
        h.run("ln moodify.js");
        assert_eq!(h.output(), vec!["opening link in new window..."]);
        assert_eq!(
            *h.navigator.opened.borrow(),
            vec!["https://github.com/nguyldo/moodify"]
        );
    }

    #[test]
    fn test_ln_errors() {
        let mut h = Harness::new();
        h.run("ln");
        assert_eq!(h.take_output(), vec!["ln: missing operand", "usage: ln <file>"]);
        h.run("ln ghost");
        assert_eq!(h.take_output(), vec!["ln: ghost: no such file or directory"]);
        h.run("cd Applications");
        h.run("ln paging.c");
        assert_eq!(h.take_output(), vec!["opening link in new window..."]);
    }

    #[test]
    fn test_ln_without_link() {
        use std::rc::Rc;

        use crate::content::ContentSource;

        struct NoLinks;
        impl ContentSource for NoLinks {
            fn content(&self, _name: &str) -> Option<Vec<String>> {
                None
            }
            fn link(&self, _name: &str) -> Option<String> {
                None
            }
        }

        let mut h = Harness::new();
        h.services.content = Rc::new(NoLinks);
        h.run("ln README.md");
        assert_eq!(h.output(), vec!["ln: README.md: no associated link"]);
    }
}
