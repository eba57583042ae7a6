use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use umlscan_lexer::{
    scan_document, DialectConfig, DialectRegistry, Mode, ScanState, TokenKind, TokenizedDocument,
};

#[derive(Parser)]
#[command(name = "umlscan")]
#[command(about = "Line-resumable scanner for PlantUML diagram dialects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dialect name, suffix or content id (default: from the file extension)
    #[arg(long, global = true)]
    dialect: Option<String>,

    /// Columns per indentation level
    #[arg(long, global = true, env = "UMLSCAN_INDENT_UNIT", default_value_t = 4)]
    indent_unit: u32,

    /// Log scanner activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens and outgoing state of every line
    Tokens {
        /// Input diagram file
        path: PathBuf,
    },

    /// List the registered dialects
    Dialects,

    /// Render a file as highlighted HTML
    Highlight {
        /// Input diagram file
        path: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report constructs left open at the end of a file
    Check {
        /// Input diagram file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = DialectRegistry::with_builtins();
    let dialect = cli.dialect.as_deref();

    match &cli.command {
        Command::Tokens { path } => {
            let config = resolve(&registry, dialect, path);
            let source = read_source(path);
            print!("{}", render_tokens(config, &source, cli.indent_unit));
        }
        Command::Dialects => print!("{}", render_dialects(&registry)),
        Command::Highlight { path, output } => {
            let config = resolve(&registry, dialect, path);
            let source = read_source(path);
            let title = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let html = render_html(config, &source, &title);
            match output {
                Some(out) => {
                    if let Err(e) = std::fs::write(out, &html) {
                        eprintln!("Error writing {}: {e}", out.display());
                        std::process::exit(1);
                    }
                    eprintln!("Highlighted: {}", out.display());
                }
                None => print!("{html}"),
            }
        }
        Command::Check { path } => {
            let config = resolve(&registry, dialect, path);
            let source = read_source(path);
            let doc = TokenizedDocument::from_text(config, &source);
            match doc.unterminated() {
                Some(state) => {
                    eprintln!("{}: {}", path.display(), describe_unterminated(state));
                    std::process::exit(1);
                }
                None => eprintln!("OK: {}", path.display()),
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve<'r>(registry: &'r DialectRegistry, dialect: Option<&str>, path: &Path) -> &'r DialectConfig {
    let found = match dialect {
        Some(key) => registry.lookup(key),
        None => registry.lookup_path(path),
    };
    match found {
        Ok(config) => {
            tracing::debug!(dialect = config.name, path = %path.display(), "resolved dialect");
            config
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_source(path: &Path) -> String {
    if !path.exists() {
        eprintln!("Error: file not found: {}", path.display());
        std::process::exit(1);
    }
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

// --- Rendering ---

fn render_tokens(config: &DialectConfig, source: &str, unit: u32) -> String {
    let mut out = String::new();
    let scanned = scan_document(source, config);

    for (number, (line, result)) in source.lines().zip(&scanned).enumerate() {
        out.push_str(&format!("{:>4} | {line}\n", number + 1));
        for token in &result.tokens {
            if token.kind == TokenKind::Unstyled && token.text(line).trim().is_empty() {
                continue;
            }
            out.push_str(&format!(
                "     {:>3}..{:<3} {:<10} {:?}\n",
                token.span.start,
                token.span.end,
                format!("{:?}", token.kind),
                token.text(line)
            ));
        }

        let state = &result.state_after;
        if !state.is_normal() {
            out.push_str(&format!(
                "     -> {:?} depth {}",
                state.mode(),
                state.indent_depth()
            ));
            if let Some(width) = config.indent(state, unit) {
                out.push_str(&format!(" indent {width}"));
            }
            out.push('\n');
        }
    }
    out
}

fn render_dialects(registry: &DialectRegistry) -> String {
    let mut out = String::new();
    for dialect in registry.iter() {
        let suffixes: Vec<String> = dialect.suffixes.iter().map(|s| format!(".{s}")).collect();
        out.push_str(&format!(
            "{:<18} {:<26} {:<28} {}\n",
            dialect.name,
            dialect.label,
            dialect.content_id,
            suffixes.join(" ")
        ));
    }
    out
}

fn render_html(config: &DialectConfig, source: &str, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    html.push_str("  <style>\n");
    html.push_str(STYLESHEET);
    html.push_str("  </style>\n</head>\n<body>\n<pre class=\"umlscan\">");

    for (line, result) in source.lines().zip(scan_document(source, config)) {
        let chars: Vec<char> = line.chars().collect();
        let slice = |start: usize, end: usize| -> String { chars[start..end].iter().collect() };

        let mut column = 0;
        for token in &result.tokens {
            // Leading indentation is not tokenized.
            if token.span.start > column {
                html.push_str(&escape_html(&slice(column, token.span.start)));
            }
            let text = escape_html(&slice(token.span.start, token.span.end));
            match token.kind.style() {
                Some(style) => html.push_str(&format!("<span class=\"cm-{style}\">{text}</span>")),
                None => html.push_str(&text),
            }
            column = token.span.end;
        }
        if column < chars.len() {
            html.push_str(&escape_html(&slice(column, chars.len())));
        }
        html.push('\n');
    }

    html.push_str("</pre>\n</body>\n</html>\n");
    html
}

const STYLESHEET: &str = "    .cm-comment { color: #a50; font-style: italic; }
    .cm-string { color: #a11; }
    .cm-keyword { color: #708; font-weight: bold; }
    .cm-def { color: #00f; }
    .cm-number { color: #164; }
    .cm-atom { color: #219; }
    .cm-operator { color: #555; }
";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn describe_unterminated(state: &ScanState) -> String {
    let construct = match state.mode() {
        Mode::Normal => "nothing",
        Mode::InBlockComment => "block comment",
        Mode::InString => "string",
        Mode::InNote => "note",
        Mode::InBox => "box",
        Mode::InGroup => "group",
        Mode::InColor => "color literal",
    };
    format!(
        "unterminated {construct} at end of file (open constructs: {})",
        state.frames().len()
    )
}
