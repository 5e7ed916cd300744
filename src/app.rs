//! Command dispatch: each CLI subcommand loads what it needs through the
//! library API and renders one page to stdout.

use chrono::NaiveDate;
use tracing::info;

use crate::cli::{Args, Command, ConfigAction};
use crate::config::Config;
use crate::constants::lang::MISSING_TEXT_PLACEHOLDER;
use crate::error::AppError;
use crate::fetcher::api;
use crate::fetcher::create_http_client_with_timeout;
use crate::fetcher::list_utils::{format_date_for_display, format_time_for_display};
use crate::fetcher::models::{CalendarEvent, ContactMessage, NewsPost};
use crate::locale::{Language, LanguageStore};
use crate::ui;

/// Runs the parsed command to completion.
pub async fn run(args: Args) -> Result<(), AppError> {
    let command = args.command.unwrap_or(Command::Home);

    // Commands that never touch the network
    match &command {
        Command::Config { action } => return run_config_action(action).await,
        Command::Lang { tag } => return run_lang_command(tag.as_deref()),
        _ => {}
    }

    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let base_url = config.api_base_url.as_str();
    let lang = resolve_language(args.lang.as_deref());
    let ph = MISSING_TEXT_PLACEHOLDER;

    let mut buffer = String::new();
    match command {
        Command::Home => {
            // The three independent front-page sections load concurrently
            let (heroes, posts, view) = futures::try_join!(
                api::fetch_heroes(&client, base_url),
                api::fetch_news(&client, base_url),
                api::fetch_leaderboard(&client, base_url, None),
            )?;

            ui::push_page_header(&mut buffer, &page_title("ნარდი", "Backgammon", lang), 60);
            for url in api::hero_image_urls(&heroes, base_url) {
                buffer.push_str(&url);
                buffer.push('\n');
            }
            buffer.push('\n');

            let mut news_table = ui::Table::new(NEWS_HEADERS.to_vec());
            for p in posts.iter().take(5) {
                news_table.add_row(news_row(p, lang, ph));
            }
            news_table.render(&mut buffer);

            if let Some(view) = view {
                buffer.push('\n');
                ui::push_field(&mut buffer, "Standings", &view.tournament.display_name(lang, ph));
                let mut board = ui::Table::new(vec!["Rank", "Player", "Score"]);
                for (i, entry) in view.entries.iter().enumerate() {
                    board.add_row(vec![
                        view.rank_of(i).to_string(),
                        entry.display_name(lang, ph),
                        entry.score.to_string(),
                    ]);
                }
                board.render(&mut buffer);
            }
        }
        Command::Tournaments => {
            let tournaments = api::fetch_active_tournaments(&client, base_url).await?;
            ui::push_page_header(&mut buffer, &page_title("ტურნირები", "Tournaments", lang), 60);
            let mut table = ui::Table::new(vec!["Name", "Events", "Created"]);
            for t in &tournaments {
                table.add_row(vec![
                    t.display_name(lang, ph),
                    t.calendar.len().to_string(),
                    timestamp_date(t.created_at.as_deref(), ph),
                ]);
            }
            if table.is_empty() {
                ui::push_field(&mut buffer, "Tournaments", ph);
            } else {
                table.render(&mut buffer);
            }
        }
        Command::Archive => {
            let by_year = api::fetch_archived_tournaments_by_year(&client, base_url).await?;
            ui::push_page_header(&mut buffer, &page_title("არქივი", "Archive", lang), 60);
            for (year, tournaments) in by_year {
                ui::push_field(&mut buffer, "Year", &year.to_string());
                let mut table = ui::Table::new(vec!["Name", "Events"]);
                for t in tournaments {
                    table.add_row(vec![t.display_name(lang, ph), t.calendar.len().to_string()]);
                }
                table.render(&mut buffer);
                buffer.push('\n');
            }
        }
        Command::Tournament { document_id } => {
            let t = api::fetch_tournament(&client, base_url, &document_id).await?;
            ui::push_page_header(&mut buffer, &t.display_name(lang, ph), 60);
            if let Some(description) = &t.description {
                ui::push_field(&mut buffer, "About", description);
            }
            let mut table = ui::Table::new(vec!["Event", "Date", "Start"]);
            for e in &t.calendar {
                table.add_row(vec![
                    e.display_name(lang, ph),
                    e.date
                        .as_deref()
                        .map(format_date_for_display)
                        .unwrap_or_else(|| ph.to_string()),
                    e.start
                        .as_deref()
                        .map(format_time_for_display)
                        .unwrap_or_else(|| ph.to_string()),
                ]);
            }
            if !table.is_empty() {
                table.render(&mut buffer);
            }
        }
        Command::Calendar {
            search,
            finished,
            upcoming,
            interactive,
        } => {
            let mut events = api::fetch_calendar(&client, base_url).await?;
            if interactive {
                let title = page_title("კალენდარი", "Calendar", lang);
                return ui::run_search_loop(&title, CALENDAR_HEADERS, |query| {
                    api::filter_events(events.clone(), query)
                        .iter()
                        .map(|e| calendar_row(e, lang, ph))
                        .collect()
                });
            }
            if let Some(query) = search {
                events = api::filter_events(events, &query);
            }
            let (done, pending) = api::partition_events(events);
            ui::push_page_header(&mut buffer, &page_title("კალენდარი", "Calendar", lang), 60);
            let mut table = ui::Table::new(CALENDAR_HEADERS.to_vec());
            let selected: Vec<_> = if finished {
                done
            } else if upcoming {
                pending
            } else {
                pending.into_iter().chain(done).collect()
            };
            for e in &selected {
                table.add_row(calendar_row(e, lang, ph));
            }
            table.render(&mut buffer);
        }
        Command::Event { id } => {
            let e = api::find_calendar_event(&client, base_url, id).await?;
            ui::push_page_header(&mut buffer, &e.display_name(lang, ph), 60);
            ui::push_field(
                &mut buffer,
                "Date",
                &e.date
                    .as_deref()
                    .map(format_date_for_display)
                    .unwrap_or_else(|| ph.to_string()),
            );
            ui::push_field(
                &mut buffer,
                "Start",
                &e.start
                    .as_deref()
                    .map(format_time_for_display)
                    .unwrap_or_else(|| ph.to_string()),
            );
            ui::push_field(&mut buffer, "Status", if e.finished { "finished" } else { "upcoming" });
            if let Some(url) = &e.url {
                ui::push_field(&mut buffer, "Link", url);
            }
            if let Some(results) = &e.results {
                ui::push_field(&mut buffer, "Results", results);
            }
        }
        Command::News {
            search,
            day,
            interactive,
        } => {
            let mut posts = api::fetch_news(&client, base_url).await?;
            if interactive {
                let title = page_title("სიახლეები", "News", lang);
                return ui::run_search_loop(&title, NEWS_HEADERS, |query| {
                    api::filter_news(posts.clone(), query)
                        .iter()
                        .map(|p| news_row(p, lang, ph))
                        .collect()
                });
            }
            if let Some(query) = search {
                posts = api::filter_news(posts, &query);
            }
            if let Some(raw) = day {
                let day = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                    AppError::Custom(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
                })?;
                posts = api::filter_news_by_day(posts, day);
            }
            ui::push_page_header(&mut buffer, &page_title("სიახლეები", "News", lang), 60);
            let mut table = ui::Table::new(NEWS_HEADERS.to_vec());
            for p in &posts {
                table.add_row(news_row(p, lang, ph));
            }
            table.render(&mut buffer);
        }
        Command::Post { document_id } => {
            let p = api::fetch_news_post(&client, base_url, &document_id).await?;
            ui::push_page_header(&mut buffer, &p.display_title(lang, ph), 60);
            buffer.push_str(&ui::render_rich_text(p.localized_body(lang)));
            if let Some(image) = p.content.as_ref().and_then(|m| m.absolute_url(base_url)) {
                ui::push_field(&mut buffer, "Image", &image);
            }
        }
        Command::Champions => {
            let matrix = api::fetch_champions(&client, base_url).await?;
            ui::push_page_header(&mut buffer, &page_title("ჩემპიონები", "Champions", lang), 60);
            let mut headers = vec!["Contestant".to_string()];
            headers.extend(matrix.years.iter().map(|y| y.to_string()));
            let mut table = ui::Table::new(headers.iter().map(String::as_str).collect());
            for c in &matrix.contestants {
                let mut row = vec![c.display_name(lang, ph)];
                for year in &matrix.years {
                    row.push(
                        matrix
                            .result_for(c, *year)
                            .map(|r| r.display_name(lang, ph))
                            .unwrap_or_else(|| ph.to_string()),
                    );
                }
                table.add_row(row);
            }
            table.render(&mut buffer);
        }
        Command::Leaderboard { tournament } => {
            let view =
                api::fetch_leaderboard(&client, base_url, tournament.as_deref()).await?;
            ui::push_page_header(&mut buffer, &page_title("ლიდერბორდი", "Leaderboard", lang), 60);
            match view {
                Some(view) => {
                    ui::push_field(&mut buffer, "Tournament", &view.tournament.display_name(lang, ph));
                    let mut table = ui::Table::new(vec!["Rank", "Player", "Score"]);
                    for (i, entry) in view.entries.iter().enumerate() {
                        table.add_row(vec![
                            view.rank_of(i).to_string(),
                            entry.display_name(lang, ph),
                            entry.score.to_string(),
                        ]);
                    }
                    table.render(&mut buffer);
                }
                None => ui::push_error_line(&mut buffer, "No tournament has standings yet"),
            }
        }
        Command::Partners => {
            let partners = api::fetch_partners(&client, base_url).await?;
            ui::push_page_header(&mut buffer, &page_title("პარტნიორები", "Partners", lang), 60);
            let mut table = ui::Table::new(vec!["Partner", "Logo"]);
            for p in &partners {
                table.add_row(vec![
                    p.display_name(lang, ph),
                    p.content
                        .as_ref()
                        .and_then(|m| m.absolute_url(base_url))
                        .unwrap_or_else(|| ph.to_string()),
                ]);
            }
            table.render(&mut buffer);
        }
        Command::Federations => {
            let federations = api::fetch_federations(&client, base_url).await?;
            ui::push_page_header(&mut buffer, &page_title("ფედერაციები", "Federations", lang), 60);
            let mut table = ui::Table::new(vec!["Id", "Federation"]);
            for f in &federations {
                table.add_row(vec![f.document_id.clone(), f.display_title(lang, ph)]);
            }
            table.render(&mut buffer);
        }
        Command::Federation { document_id } => {
            let f = api::fetch_federation(&client, base_url, &document_id).await?;
            ui::push_page_header(&mut buffer, &f.display_title(lang, ph), 60);
            let description = crate::localized::pick(
                f.description.as_deref(),
                f.english_description.as_deref(),
                lang,
                ph,
            );
            ui::push_field(&mut buffer, "About", description);
            if let Some(logo) = f.content.as_ref().and_then(|m| m.absolute_url(base_url)) {
                ui::push_field(&mut buffer, "Logo", &logo);
            }
        }
        Command::Heroes => {
            let heroes = api::fetch_heroes(&client, base_url).await?;
            ui::push_page_header(&mut buffer, "Hero banners", 60);
            for url in api::hero_image_urls(&heroes, base_url) {
                buffer.push_str(&url);
                buffer.push('\n');
            }
        }
        Command::Gallery => {
            let items = api::fetch_galleries(&client, base_url).await?;
            ui::push_page_header(&mut buffer, &page_title("გალერეა", "Gallery", lang), 60);
            for item in &items {
                if let Some(url) = item.file.as_ref().and_then(|m| m.absolute_url(base_url)) {
                    buffer.push_str(&url);
                    buffer.push('\n');
                }
            }
        }
        Command::Rules { long_version } => {
            let kind = if long_version {
                api::TextBlockKind::LongRules
            } else {
                api::TextBlockKind::Rules
            };
            let block = api::fetch_text_block(&client, base_url, kind, lang).await?;
            ui::push_page_header(&mut buffer, &page_title("წესები", "Rules", lang), 60);
            buffer.push_str(&ui::render_rich_text(block.rich_text(lang)));
        }
        Command::Points => {
            let block =
                api::fetch_text_block(&client, base_url, api::TextBlockKind::Points, lang).await?;
            ui::push_page_header(&mut buffer, &page_title("ქულები", "Points", lang), 60);
            buffer.push_str(&ui::render_rich_text(block.rich_text(lang)));
        }
        Command::International => {
            let block = api::fetch_text_block(
                &client,
                base_url,
                api::TextBlockKind::International,
                lang,
            )
            .await?;
            ui::push_page_header(
                &mut buffer,
                &page_title("საერთაშორისო", "International", lang),
                60,
            );
            buffer.push_str(&ui::render_rich_text(block.rich_text(lang)));
            if let Some(image) = block.image.as_ref().and_then(|m| m.absolute_url(base_url)) {
                ui::push_field(&mut buffer, "Image", &image);
            }
        }
        Command::Footer => {
            let footer = api::fetch_footer(&client, base_url, lang).await?;
            ui::push_page_header(&mut buffer, &page_title("კონტაქტი", "Contact", lang), 60);
            ui::push_field(&mut buffer, "Address", footer.adress.as_deref().unwrap_or(ph));
            ui::push_field(&mut buffer, "Phone", footer.number.as_deref().unwrap_or(ph));
            ui::push_field(&mut buffer, "Email", footer.mail.as_deref().unwrap_or(ph));
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let contact = ContactMessage {
                name,
                email,
                message,
            };
            api::submit_contact(&client, base_url, &contact).await?;
            info!("Contact message submitted");
            buffer.push_str("Message sent.\n");
        }
        Command::Admin => {
            buffer.push_str(&api::admin_console_url(base_url));
            buffer.push('\n');
        }
        Command::Config { .. } | Command::Lang { .. } => unreachable!("handled above"),
    }

    ui::print_page(&buffer)?;
    Ok(())
}

/// CLI language flag wins for one invocation; otherwise the persisted
/// preference, which defaults to Georgian.
fn resolve_language(flag: Option<&str>) -> Language {
    match flag {
        Some(tag) => Language::from_tag(tag),
        None => LanguageStore::open_default().current(),
    }
}

const CALENDAR_HEADERS: &[&str] = &["Id", "Event", "Date", "Status"];
const NEWS_HEADERS: &[&str] = &["Id", "Title", "Published"];

/// The date part of an API timestamp, for table cells. Short or otherwise
/// malformed values pass through to the formatter's as-is fallback.
fn timestamp_date(raw: Option<&str>, placeholder: &str) -> String {
    match raw {
        Some(d) => format_date_for_display(d.get(..10).unwrap_or(d)),
        None => placeholder.to_string(),
    }
}

fn news_row(post: &NewsPost, lang: Language, placeholder: &str) -> Vec<String> {
    vec![
        post.document_id.clone(),
        post.display_title(lang, placeholder),
        timestamp_date(post.created_at.as_deref(), placeholder),
    ]
}

fn calendar_row(event: &CalendarEvent, lang: Language, placeholder: &str) -> Vec<String> {
    vec![
        event.id.to_string(),
        event.display_name(lang, placeholder),
        event
            .date
            .as_deref()
            .map(format_date_for_display)
            .unwrap_or_else(|| placeholder.to_string()),
        if event.finished { "finished" } else { "upcoming" }.to_string(),
    ]
}

fn page_title(georgian: &str, english: &str, lang: Language) -> String {
    match lang {
        Language::Georgian => georgian.to_string(),
        Language::English => english.to_string(),
    }
}

async fn run_config_action(action: &ConfigAction) -> Result<(), AppError> {
    match action {
        ConfigAction::Show => Config::display().await,
        ConfigAction::SetUrl { url } => {
            let mut config = Config::load().await.unwrap_or_default();
            config.api_base_url = url.clone();
            config.save().await?;
            println!("Config updated successfully!");
            Ok(())
        }
        ConfigAction::SetLogFile { path } => {
            let mut config = Config::load().await?;
            config.log_file_path = Some(path.clone());
            config.save().await?;
            println!("Config updated successfully!");
            Ok(())
        }
        ConfigAction::ClearLogFile => {
            let mut config = Config::load().await?;
            config.log_file_path = None;
            config.save().await?;
            println!("Custom log file path cleared. Using default location.");
            Ok(())
        }
    }
}

fn run_lang_command(tag: Option<&str>) -> Result<(), AppError> {
    let store = LanguageStore::open_default();
    match tag {
        Some(tag) => {
            let lang = Language::from_tag(tag);
            store.set(lang)?;
            println!("Display language set to {lang}");
        }
        None => println!("Display language: {}", store.current()),
    }
    Ok(())
}
