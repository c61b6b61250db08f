use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use postcraft::ai::content::{
    content_metrics, estimate_performance, quality_score, ContentGenerator, GenerationRequest,
    TemplateStructure, Tone,
};
use postcraft::config::{ConfigLoader, PostcraftConfig};
use postcraft::logging::init_logging;
use postcraft::random::ThreadRandom;
use postcraft::Error;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// LinkedIn post generator
#[derive(Parser, Debug)]
#[command(name = "postcraft", version, about = "Generate LinkedIn posts from curated templates")]
struct Cli {
    /// Configuration file path (defaults to ./postcraft.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Skip the completion service and use templates only
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a single post
    Generate {
        /// Post topic
        topic: String,

        /// Target audience
        #[arg(short, long)]
        audience: Option<String>,

        /// Tone (conversational, bold, actionable, visionary, professional)
        #[arg(short, long)]
        tone: Option<Tone>,

        /// Additional context passed to the completion service
        #[arg(short, long)]
        context: Option<String>,

        /// Pick the content strategy at random instead of from the tone
        #[arg(long)]
        vary: bool,
    },

    /// Generate several posts with rotating tones
    Batch {
        /// Post topic
        topic: String,

        /// Number of posts
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,

        /// Target audience
        #[arg(short, long)]
        audience: Option<String>,

        /// Additional context passed to the completion service
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Browse the template catalog
    Templates {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Score an existing post text
    Analyze {
        /// Post text
        text: String,
    },

    /// Write an annotated sample configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "postcraft.toml.example")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
enum TemplateCommands {
    /// List categories
    Categories,

    /// List templates, optionally within one category
    List {
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Fill a template from a category
    Show {
        /// Category id
        category: String,

        /// Zero-based template index within the category
        #[arg(default_value_t = 0)]
        index: usize,

        /// Placeholder value as name=value (repeatable)
        #[arg(long = "set", value_parser = parse_key_value)]
        values: Vec<(String, String)>,

        /// Context for completion-assisted filling
        #[arg(short, long, default_value = "")]
        context: String,
    },

    /// Search templates by keyword
    Search {
        keyword: String,

        /// Restrict to categories carrying any of these tags
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// List all category tags
    Tags,

    /// Pick a random template
    Random {
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Catalog statistics
    Stats,
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_template_line(template: &TemplateStructure) {
    println!(
        "{:<8} {:<22} {:<36} {:?}/{:?}",
        template.id, template.category_id, template.title, template.engagement, template.length
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::InitConfig { output, force } = &cli.command {
        if output.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", output.display());
        }
        PostcraftConfig::generate_sample_config(output)?;
        println!("📝 サンプル設定ファイルを生成しました: {}", output.display());
        println!("💡 このファイルを postcraft.toml にコピーして編集してください");
        return Ok(());
    }

    if let Commands::Analyze { text } = &cli.command {
        return run_analyze(text, cli.json);
    }

    let mut config = ConfigLoader::new()
        .load_from_file(cli.config.as_deref().and_then(|p| p.to_str()))
        .load_from_env()
        .build()?;

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.offline {
        config.llm.enabled = false;
    }

    let _guard = init_logging(&config.logging)?;
    debug!("設定読み込み完了: {:?}", config.generation);

    let generator = config.build_generator()?;

    match cli.command {
        Commands::Generate {
            topic,
            audience,
            tone,
            context,
            vary,
        } => {
            let mut request = GenerationRequest::new(topic)
                .with_audience(audience.unwrap_or_else(|| config.generation.default_audience.clone()))
                .with_tone(tone.unwrap_or(config.generation.default_tone))
                .with_variety(vary);
            if let Some(context) = context {
                request = request.with_context(context);
            }

            let post = generator.generate_post(&request).await?;
            if cli.json {
                print_json(&post)?;
            } else {
                println!("{}", post.content);
                eprintln!("📊 品質: {} ({})", post.quality.score, post.quality.grade);
            }
        }
        Commands::Batch {
            topic,
            count,
            audience,
            context,
        } => {
            let max = config.generation.max_batch_size;
            if count == 0 || count > max {
                return Err(Error::InvalidInput(format!("count must be between 1 and {}", max)).into());
            }

            let mut request = GenerationRequest::new(topic)
                .with_audience(audience.unwrap_or_else(|| config.generation.default_audience.clone()));
            if let Some(context) = context {
                request = request.with_context(context);
            }

            let posts = generator.generate_multiple_posts(&request, count).await?;
            if cli.json {
                print_json(&posts)?;
            } else {
                for (i, post) in posts.iter().enumerate() {
                    println!(
                        "── {}/{} ({}, {}, {} {}) ──",
                        i + 1,
                        posts.len(),
                        post.tone,
                        post.strategy,
                        post.quality.score,
                        post.quality.grade
                    );
                    println!("{}\n", post.content);
                }
            }
        }
        Commands::Templates { command } => run_templates(&generator, command, cli.json).await?,
        Commands::Analyze { .. } | Commands::InitConfig { .. } => {}
    }

    Ok(())
}

fn run_analyze(text: &str, json: bool) -> Result<()> {
    let metrics = content_metrics(text);
    let quality = quality_score(text);
    let performance = estimate_performance(text);

    if json {
        return print_json(&serde_json::json!({
            "metrics": metrics,
            "quality": quality,
            "performance": performance,
        }));
    }

    println!("品質スコア:   {} ({})", quality.score, quality.grade);
    println!("反応予測:     {} ({})", performance.score, performance.expected_engagement);
    println!("文字数:       {} (本文 {})", metrics.total_characters, metrics.content_characters);
    println!("ハッシュタグ: {}", metrics.hashtags.join(" "));
    println!("投稿時間帯:   {}", performance.best_time_to_post);
    for suggestion in quality.suggestions.iter().chain(performance.tips.iter()) {
        println!("💡 {}", suggestion);
    }
    Ok(())
}

async fn run_templates(generator: &ContentGenerator, command: TemplateCommands, json: bool) -> Result<()> {
    let store = generator.store();

    match command {
        TemplateCommands::Categories => {
            if json {
                return print_json(store.categories());
            }
            for category in store.categories() {
                println!(
                    "{} {:<22} {:>2}  {}",
                    category.icon,
                    category.name,
                    store.templates_by_category(&category.id).len(),
                    category.description
                );
            }
        }
        TemplateCommands::List { category } => {
            let templates = match &category {
                Some(id) => {
                    if store.category(id).is_none() {
                        return Err(Error::NotFound(format!("category '{}'", id)).into());
                    }
                    store.templates_by_category(id)
                }
                None => store.templates().iter().collect(),
            };
            if json {
                return print_json(&templates);
            }
            templates.into_iter().for_each(print_template_line);
        }
        TemplateCommands::Show {
            category,
            index,
            values,
            context,
        } => {
            let template = store
                .template(&category, index)
                .ok_or_else(|| Error::NotFound(format!("template {} in '{}'", index, category)))?;
            let values: HashMap<String, String> = values.into_iter().collect();

            let customized = generator
                .customize_template(template, &context, &values)
                .await
                .context("Failed to fill template")?;

            if json {
                return print_json(&serde_json::json!({
                    "template": template,
                    "content": customized.content,
                    "source": customized.source,
                    "unfilled": customized.unfilled,
                }));
            }
            println!("{}\n\n{}", customized.content, template.hashtag_hint);
            if !customized.unfilled.is_empty() {
                eprintln!("💡 未入力: {}", customized.unfilled.join(", "));
            }
        }
        TemplateCommands::Search { keyword, tag } => {
            let hits = store.search_templates(&keyword, &tag);
            if json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("該当するテンプレートはありません: {}", keyword);
            }
            hits.into_iter().for_each(print_template_line);
        }
        TemplateCommands::Tags => {
            let tags = store.all_tags();
            if json {
                return print_json(&tags);
            }
            println!("{}", tags.join(", "));
        }
        TemplateCommands::Random { category } => {
            let template = store
                .random_template(category.as_deref(), &ThreadRandom)
                .ok_or_else(|| {
                    Error::NotFound(match &category {
                        Some(id) => format!("templates in '{}'", id),
                        None => "templates".to_string(),
                    })
                })?;
            if json {
                return print_json(template);
            }
            print_template_line(template);
            println!("\n{}", template.body_pattern);
        }
        TemplateCommands::Stats => {
            let stats = store.statistics();
            if json {
                return print_json(&stats);
            }
            println!("カテゴリ数:       {}", stats.total_categories);
            println!("テンプレート数:   {}", stats.total_templates);
            println!("タグ数:           {}", stats.total_tags);
            println!("平均/カテゴリ:    {}", stats.average_templates_per_category);
        }
    }

    Ok(())
}
