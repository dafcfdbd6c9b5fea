use folio_core::{FileKind, OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// CSS class for a listed entry.
fn kind_class(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Directory => css::textCyan,
        FileKind::Code => css::textGreen,
        FileKind::Image => css::textMagenta,
        FileKind::Document => css::textYellow,
        FileKind::Archive => css::textRed,
        FileKind::Executable => css::textBlue,
        FileKind::Plain => css::textFg,
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, cwd, input } => {
            view! {
                <div class=css::command>
                    <span class=css::textGreen>{prompt}</span>
                    <span class=css::textDim>{format!(" {cwd} ")}</span>
                    <span class=css::textFg>{input}</span>
                </div>
            }.into_any()
        }
        OutputLineData::Text(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
            }.into_any()
        }
        OutputLineData::ListEntry { name, kind } => {
            let suffix = if kind == FileKind::Directory { "/" } else { "" };
            view! {
                <div class=css::listEntry>
                    <span class=kind_class(kind)>{format!("{name}{suffix}")}</span>
                </div>
            }.into_any()
        }
        OutputLineData::Error(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
            }.into_any()
        }
        OutputLineData::Info(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
            }.into_any()
        }
        OutputLineData::Empty => {
            view! {
                <div class=css::lineEmpty></div>
            }.into_any()
        }
    }
}
