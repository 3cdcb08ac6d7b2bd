use clap::{Parser, Subcommand};
use onesheet::config::{PageSize, SheetConfig, stock_config_toml};
use onesheet::layout::{self, Orientation};
use onesheet::templates::{self, TemplateChoice};
use onesheet::themes::{Theme, ThemeName};
use onesheet::{measure, output, parser, render};
use std::io::Read;
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "onesheet")]
#[command(about = "Render pasted text into a print-ready one- or two-page document")]
#[command(long_about = "\
Render pasted text into a print-ready one- or two-page document

Paste or pipe in free-form text — notes, lyrics, a recipe — and get back a
single self-contained HTML file sized for printing. Lightweight markup
becomes structured sections, and the layout fitter picks the font size,
column count, and margins that make the content fit the page budget:
margins shrink first, then columns are added, then (last) the type shrinks.

Content templates:

  lyrics    [Verse 1] / [Chorus] markers become section headings
  recipe    Ingredients / Instructions keywords become section headings,
            Prep time: / Servings: lines become bold labels

Both are auto-detected by default; force one with --template, or pass
--template none for plain markdown.

Run 'onesheet gen-config' to generate a documented onesheet.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Path to a onesheet.toml config file
    #[arg(long, default_value = "onesheet.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Layout flags shared by render and fit; each overrides its config key.
#[derive(clap::Args, Clone)]
struct LayoutArgs {
    /// Paper size preset
    #[arg(long, value_enum)]
    page_size: Option<PageSize>,

    /// Number of pages the content must fit across
    #[arg(long)]
    pages: Option<u32>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<Orientation>,

    /// Pin the font size in px (auto-fit still adjusts margins and columns)
    #[arg(long)]
    font_size: Option<f64>,
}

impl LayoutArgs {
    fn apply(&self, config: &mut SheetConfig) {
        if let Some(size) = self.page_size {
            config.page.size = size;
        }
        if let Some(pages) = self.pages {
            config.page.max_pages = pages;
        }
        if let Some(orientation) = self.orientation {
            config.page.orientation = orientation;
        }
        if let Some(font_size) = self.font_size {
            config.font_size = Some(font_size);
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Render a text file (or stdin: "-") into a print-ready HTML document
    Render {
        /// Input text file, or "-" for stdin
        input: PathBuf,

        /// Output HTML file
        #[arg(long, short, default_value = "sheet.html")]
        output: PathBuf,

        /// Document title (default: first heading, or "Onesheet")
        #[arg(long)]
        title: Option<String>,

        /// Theme preset
        #[arg(long, value_enum)]
        theme: Option<ThemeName>,

        /// Content-type template
        #[arg(long, value_enum)]
        template: Option<TemplateChoice>,

        /// Measured content height in px; skips the built-in estimate
        #[arg(long)]
        content_height: Option<f64>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Compute layout parameters for a measured content height
    Fit {
        /// Content height in px at 16px font, single column
        #[arg(long)]
        content_height: f64,

        /// Emit the layout result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// List theme presets
    Themes,
    /// List content templates
    Templates,
    /// Print a stock onesheet.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = SheetConfig::load(&cli.config)?;

    match cli.command {
        Command::Render {
            input,
            output,
            title,
            theme,
            template,
            content_height,
            layout: layout_args,
        } => {
            layout_args.apply(&mut config);
            if let Some(theme) = theme {
                config.theme = theme;
            }
            if let Some(template) = template {
                config.template = template;
            }
            config.validate()?;

            let raw = read_input(&input)?;
            let chosen = config.template.resolve(&raw);
            let markdown = match chosen {
                Some(t) => t.transform(&raw),
                None => raw,
            };

            let sections = parser::parse_content(&markdown);
            let layout_config = config.layout_config();
            let estimated = content_height.is_none();
            let height = content_height.unwrap_or_else(|| {
                measure::estimate_height(&markdown, measure::reference_text_width(&layout_config))
            });
            let result = layout::fit(height, &layout_config);

            let theme = Theme::get(config.theme);
            let title = title
                .or_else(|| parser::extract_title(&markdown))
                .unwrap_or_else(|| "Onesheet".to_string());
            let document = render::render_document(&title, &sections, &result, theme, chosen);
            std::fs::write(&output, document.into_string())?;

            let section_count = sections.matches("class=\"section\"").count().max(1);
            for line in output::format_render_summary(
                &output.display().to_string(),
                chosen,
                theme,
                section_count,
                height,
                estimated,
                &result,
                config.page.max_pages,
                config.page.orientation,
            ) {
                println!("{line}");
            }
        }
        Command::Fit {
            content_height,
            json,
            layout: layout_args,
        } => {
            layout_args.apply(&mut config);
            config.validate()?;

            let result = layout::fit(content_height, &config.layout_config());
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for line in output::format_fit(
                    &result,
                    content_height,
                    config.page.max_pages,
                    config.page.orientation,
                ) {
                    println!("{line}");
                }
            }
        }
        Command::Themes => {
            for line in output::format_themes(onesheet::themes::themes()) {
                println!("{line}");
            }
        }
        Command::Templates => {
            for line in output::format_templates(templates::templates()) {
                println!("{line}");
            }
        }
        Command::GenConfig => {
            print!("{}", stock_config_toml());
        }
    }

    Ok(())
}

/// Read the input file, or stdin when the path is `-`.
fn read_input(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}
