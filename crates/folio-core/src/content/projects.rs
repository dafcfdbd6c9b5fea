/// A featured project, listed by `projects` and stored in `~/Applications`.
#[derive(Debug)]
pub struct Project {
    pub filename: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub repo_url: &'static str,
    /// Body revealed by `cat`, after the title line.
    pub details: &'static [&'static str],
}

impl Project {
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.details.len() + 2);
        lines.push(self.name.to_string());
        lines.push(String::new());
        lines.extend(self.details.iter().map(|s| s.to_string()));
        lines
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        filename: "ppps.cpp",
        name: "Powder Pixel Physics Simulator",
        summary: "Computer graphics project - particle physics simulation in C++",
        repo_url: "https://github.com/voigniersmith/CS535FinalProject",
        details: &[
            "As an introduction to computer graphics, this was",
            "my final project. Inspiration comes from the Powder",
            "Game by Dan-Ball (https://dan-ball.jp/en/javagame/dust/).",
            "My version is implemented using shaders in C++.",
        ],
    },
    Project {
        filename: "shell.cpp",
        name: "A zsh & bash Proprietary Shell",
        summary: "CS252 final project - zsh & bash shell implementation in C++",
        repo_url: "https://github.com/voigniersmith/Shell",
        details: &[
            "The Purdue CS252 Final Project. Implementing basic features",
            "such as command parsing, pipes, and wildcards in C++.",
        ],
    },
    Project {
        filename: "omilia.js",
        name: "Omilia: A Twitter, Facebook, Reddit Clone",
        summary: "Twitter/Facebook/Reddit clone - social media app using FERN stack",
        repo_url: "https://github.com/voigniersmith/omilia",
        details: &[
            "Semester-long project that was meant as an exercise for",
            "the Agile software development cycle. Successfully turned",
            "into a social media application using a FERN stack.",
        ],
    },
    Project {
        filename: "mymalloc.c",
        name: "Proprietary Optimized Memory Allocation Library",
        summary: "Doug Lea's Memory Allocator - optimized memory allocation library",
        repo_url: "https://github.com/voigniersmith/myMalloc",
        details: &["An academic example of Doug Lea's Memory Allocator."],
    },
    Project {
        filename: "bugdetect.java",
        name: "Clang Compiler Static Bug Detector",
        summary: "Clang compiler plugin - static analysis tool for finding paired function call bugs",
        repo_url: "https://github.com/voigniersmith/clang-bug-detector",
        details: &[
            "For my Software Testing course, we implemented a",
            "static bug detector analyzing paired function calls.",
        ],
    },
    Project {
        filename: "voigniersmith.js",
        name: "My Personal Portfolio Website",
        summary: "This website - a terminal interface in the browser",
        repo_url: "https://github.com/voigniersmith/voigniersmith.github.io",
        details: &[
            "Initially inspired by Michael D'angelo's personal site,",
            "it's turned into my own idea of a proprietary shell.",
        ],
    },
    Project {
        filename: "paging.c",
        name: "Enabling Paging for an x86 Intel Galileo Machine",
        summary: "OS graduate project - TLB and paging support for Xinu on Intel Galileo",
        repo_url: "https://github.com/voigniersmith/pagingx86",
        details: &[
            "The final project for Purdue's Graduate Operating Systems",
            "course, I implemented and designed my own paging structures",
            "as well as adding support for TLB and Paging in C on the Xinu",
            "OS.",
        ],
    },
    Project {
        filename: "chess.c",
        name: "Parallel Chess",
        summary: "CS525 project - chess AI with parallel alpha-beta pruning",
        repo_url: "https://github.com/voigniersmith/parallel_chess",
        details: &[
            "The final project for CS525 Parallel Computing, this program",
            "is chess in C. The parallelism comes with Alpha-Beta pruning",
            "of user-defined-depth search trees to determine the CPU's",
            "next move.",
        ],
    },
    Project {
        filename: "cryptocalc.py",
        name: "A Cryptographic Calculator",
        summary: "CS555 project - secure multi-party computation using ElGamal & Shamir",
        repo_url: "https://github.com/voigniersmith/cs555-algorand-mpc",
        details: &[
            "By manually adding functionality for ElGamal Key Sharing,",
            "Shamir's Secret Sharing, and Algorand Smart Contracts, we",
            "were able to have a client successfully pay multiple parties",
            "to perform calculations without knowing what information",
            "they were computing or what information they were given.",
        ],
    },
    Project {
        filename: "moodify.js",
        name: "Moodify",
        summary: "Spotify API project - mood-based playlist recommendation system",
        repo_url: "https://github.com/nguyldo/moodify",
        details: &[
            "By using Spotify's API, we were able to implement a",
            "community-based recommendation algorithm that allows",
            "users to build playlists based on their current mood.",
            "This was my undergrad Senior project.",
        ],
    },
];
