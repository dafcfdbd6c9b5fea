/// A manual page shown by `man`.
#[derive(Debug)]
pub struct ManPage {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub examples: &'static [&'static str],
    pub related: &'static [&'static str],
}

impl ManPage {
    /// Renders the page as display lines.
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![
            "NAME".to_string(),
            format!("    {} - {}", self.name, self.description),
            String::new(),
            "SYNOPSIS".to_string(),
            format!("    {}", self.usage),
        ];
        if !self.examples.is_empty() {
            lines.push(String::new());
            lines.push("EXAMPLES".to_string());
            lines.extend(self.examples.iter().map(|e| format!("    {e}")));
        }
        if !self.related.is_empty() {
            lines.push(String::new());
            lines.push("SEE ALSO".to_string());
            lines.push(format!("    {}", self.related.join(", ")));
        }
        lines
    }
}

pub fn lookup_manual(name: &str) -> Option<&'static ManPage> {
    MANUAL.iter().find(|page| page.name == name)
}

pub const MANUAL: &[ManPage] = &[
    ManPage {
        name: "cat",
        description: "Display file contents in the terminal",
        usage: "cat [file_name]",
        examples: &[
            "cat ppps.cpp         - View the Powder Pixel Physics Simulator project",
            "cat shell.cpp        - View the shell implementation",
            "cat resume.txt       - View the resume",
        ],
        related: &["ls", "cd", "ln"],
    },
    ManPage {
        name: "cd",
        description: "Change the current directory",
        usage: "cd [directory_name]",
        examples: &[
            "cd ~/Applications    - Navigate to the projects folder",
            "cd Contact           - Navigate to contact information",
            "cd ~                 - Go back to home directory",
            "cd ..                - Go up one level",
        ],
        related: &["ls", "pwd"],
    },
    ManPage {
        name: "ls",
        description: "List files and directories in the current directory",
        usage: "ls [optional_directory]",
        examples: &[
            "ls                   - List current directory contents",
            "ls ~/Applications    - List all projects",
            "ls ~/Contact         - List contact information options",
        ],
        related: &["cd", "pwd"],
    },
    ManPage {
        name: "pwd",
        description: "Print the current working directory path",
        usage: "pwd",
        examples: &["pwd                  - Shows your current location in the filesystem"],
        related: &["ls", "cd"],
    },
    ManPage {
        name: "ln",
        description: "Open a URL or link associated with a file",
        usage: "ln [file_name]",
        examples: &[
            "ln ppps.cpp          - Open the GitHub repository for the project",
            "ln gmail             - Open your email client",
            "ln github            - Open the GitHub profile",
        ],
        related: &["cat", "ls"],
    },
    ManPage {
        name: "echo",
        description: "Display text in the terminal",
        usage: "echo [text]",
        examples: &["echo Hello World     - Display \"Hello World\""],
        related: &[],
    },
    ManPage {
        name: "clear",
        description: "Clear the terminal screen (also: exit, cls)",
        usage: "clear",
        examples: &["clear                - Clears all text from the terminal"],
        related: &[],
    },
    ManPage {
        name: "help",
        description: "Display a list of all available commands with brief descriptions",
        usage: "help",
        examples: &["help                 - Shows all available commands and their usage"],
        related: &["man"],
    },
    ManPage {
        name: "man",
        description: "Display detailed documentation for a specific command",
        usage: "man [command_name]",
        examples: &[
            "man cat              - View detailed documentation for the cat command",
            "man ls               - Learn how to use the ls command",
        ],
        related: &["help"],
    },
    ManPage {
        name: "whoami",
        description: "Display information about the site owner",
        usage: "whoami",
        examples: &["whoami               - Shows biographical information"],
        related: &["stats", "projects"],
    },
    ManPage {
        name: "stats",
        description: "Display repository stats and your visitor statistics",
        usage: "stats",
        examples: &["stats                - Shows GitHub stats and your session information"],
        related: &["global-stats"],
    },
    ManPage {
        name: "global-stats",
        description: "Display aggregate statistics from all visitors to the site",
        usage: "global-stats",
        examples: &["global-stats         - Shows global usage statistics"],
        related: &["stats"],
    },
    ManPage {
        name: "theme",
        description: "Change the color theme of the terminal",
        usage: "theme [theme_name]",
        examples: &[
            "theme light          - Switch to light theme",
            "theme dracula        - Switch to Dracula theme",
        ],
        related: &[],
    },
    ManPage {
        name: "time",
        description: "Display the current local time",
        usage: "time",
        examples: &["time                 - Shows the current time"],
        related: &[],
    },
    ManPage {
        name: "ps",
        description: "Change the command prompt string",
        usage: "ps [new_prompt]",
        examples: &[
            "ps >>                - Set prompt to \">>\"",
            "ps user$             - Set prompt to \"user$\"",
        ],
        related: &[],
    },
    ManPage {
        name: "history",
        description: "Display the history of commands you have executed",
        usage: "history",
        examples: &["history              - Shows all previously executed commands"],
        related: &[],
    },
    ManPage {
        name: "projects",
        description: "Display all projects with descriptions and GitHub links",
        usage: "projects",
        examples: &["projects             - Lists all projects with brief descriptions"],
        related: &["cat", "ln"],
    },
    ManPage {
        name: "view-source",
        description: "Navigate to the source code of this site on GitHub",
        usage: "view-source",
        examples: &["view-source          - Opens this site's GitHub repository"],
        related: &[],
    },
    ManPage {
        name: "view-react-docs",
        description: "Navigate to the React documentation",
        usage: "view-react-docs",
        examples: &["view-react-docs      - Opens the React documentation"],
        related: &[],
    },
    ManPage {
        name: "start",
        description: "Display the welcome message",
        usage: "start",
        examples: &["start                - Shows the introductory message"],
        related: &["help", "whoami"],
    },
    ManPage {
        name: "stop",
        description: "Stop the running text animation",
        usage: "stop",
        examples: &["stop                 - Freezes the display where it is"],
        related: &["start"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_manual() {
        assert_eq!(lookup_manual("cd").map(|p| p.usage), Some("cd [directory_name]"));
        assert!(lookup_manual("rm").is_none());
    }

    #[test]
    fn test_render_sections() {
        let lines = lookup_manual("pwd").unwrap().render();
        assert_eq!(lines[0], "NAME");
        assert_eq!(lines[1], "    pwd - Print the current working directory path");
        assert!(lines.contains(&"SEE ALSO".to_string()));
        assert_eq!(lines.last().unwrap(), "    ls, cd");
    }

    #[test]
    fn test_render_without_related() {
        let lines = lookup_manual("echo").unwrap().render();
        assert!(!lines.contains(&"SEE ALSO".to_string()));
    }
}
