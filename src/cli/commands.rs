use crate::app::{AppContext, Result};
use crate::domain::{Article, DisplayField, Episode, EpisodeLayout};

pub async fn headlines(ctx: &AppContext) -> Result<()> {
    let mut loader = ctx.headlines_loader();
    let feeds = loader.load().await;

    if feeds.is_empty() {
        println!("No headlines");
        return Ok(());
    }

    for feed in feeds {
        println!("== {} ({:?}) ==", feed.display_label(), feed.layout);
        for article in &feed.articles {
            print_article(article);
        }
        println!("  more: newsdesk section {}\n", feed.path);
    }

    loader.clear();
    Ok(())
}

pub async fn section(ctx: &AppContext, path: &str, page: Option<u32>) -> Result<()> {
    let mut loader = ctx.section_loader(path, page);
    print_articles(&loader.load().await);
    loader.clear();
    Ok(())
}

pub async fn search(ctx: &AppContext, term: &str, page: Option<u32>) -> Result<()> {
    let mut loader = ctx.search_loader(term, page);
    print_articles(&loader.load().await);
    loader.clear();
    Ok(())
}

pub fn podcasts(ctx: &AppContext) -> Result<()> {
    if ctx.podcasts.is_empty() {
        println!("No podcasts");
        return Ok(());
    }

    for (i, podcast) in ctx.podcasts.iter().enumerate() {
        let explicit = if podcast.explicit { " [E]" } else { "" };
        println!("{}. {}{}\n   {}", i + 1, podcast.title, explicit, podcast.description);

        for (platform, link) in [
            ("Apple Podcasts", &podcast.links.apple),
            ("Google Podcasts", &podcast.links.google),
            ("Spotify", &podcast.links.spotify),
        ] {
            if !link.is_empty() {
                println!("   {}: {}", platform, link);
            }
        }
    }

    Ok(())
}

pub async fn episodes(ctx: &AppContext, key: &str) -> Result<()> {
    let podcast = ctx.find_podcast(key)?;
    let mut loader = ctx.episode_loader(podcast);
    let episodes = loader.load().await;

    if episodes.is_empty() {
        println!("No episodes of {}", loader.podcast().title);
        return Ok(());
    }

    println!("{}", loader.podcast().title);
    for episode in &episodes {
        print_episode(episode);
    }

    loader.clear();
    Ok(())
}

fn print_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("No results");
        return;
    }

    for article in articles {
        print_article(article);
    }
}

fn print_article(article: &Article) {
    let Some(view_type) = article.view_type else {
        println!("  {}", article.display_headline());
        return;
    };

    let mut line = format!(
        "  [{:>2} {:<14}] {}",
        view_type.tag(),
        format!("{view_type:?}"),
        article.display_headline()
    );
    for field in [DisplayField::Section, DisplayField::Byline, DisplayField::Date] {
        let value = article.field(field);
        if view_type.shows(field) && !value.is_empty() {
            line.push_str(" | ");
            line.push_str(value);
        }
    }
    println!("{}", line);
    println!("    {}", article.url);

    let missing = article.missing_fields();
    if !missing.is_empty() {
        println!("    (missing: {:?})", missing);
    }
}

fn print_episode(episode: &Episode) {
    let marker = match episode.layout {
        Some(EpisodeLayout::Latest) => ">",
        _ => " ",
    };
    println!("{} {}  {}", marker, episode.date, episode.headline);

    if episode.expanded && !episode.description.is_empty() {
        println!("    {}", episode.description);
    }
    if !episode.display_byline().is_empty() {
        println!("    {}", episode.display_byline());
    }
    println!("    {}", episode.url);
}
