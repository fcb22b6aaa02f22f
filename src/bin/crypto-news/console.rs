//! Plain-text rendering for the console subcommands.

use crypto_news::{Article, Coin, CoinDetail, Dashboard};
use rust_decimal::{Decimal, RoundingStrategy};

/// Articles printed by the keyword lookup.
pub const LOOKUP_SHOWN: usize = 10;

/// Rounds half away from zero and pins the scale to two places (`1.5` -> `1.50`).
fn cents(d: Decimal) -> Decimal {
    let mut r = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    r.rescale(2);
    r
}

pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) if p >= Decimal::ONE => format!("${}", cents(p)),
        Some(p) => format!("${}", p.normalize()),
        None => "N/A".to_string(),
    }
}

pub fn format_change(change: Option<Decimal>) -> String {
    match change {
        Some(c) => {
            let (arrow, sign) = if c >= Decimal::ZERO { ("▲", "+") } else { ("▼", "") };
            format!("{arrow} {sign}{}%", cents(c))
        }
        None => String::new(),
    }
}

pub fn article_lines(articles: &[Article], shown: usize) -> Vec<String> {
    articles
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, a)| format!("{}. {}", i + 1, a.title))
        .collect()
}

pub fn coin_line(coin: &Coin) -> String {
    let rank = coin
        .market_cap_rank
        .map_or_else(|| "-".to_string(), |r| r.to_string());
    format!(
        "{:>4}  {:<20} {:<6} {:>14}  {}",
        rank,
        coin.name,
        coin.symbol.to_uppercase(),
        format_price(Some(coin.current_price)),
        format_change(coin.price_change_percentage_24h)
    )
}

pub fn detail_lines(d: &CoinDetail) -> Vec<String> {
    let mut out = vec![
        format!("Name:   {} ({})", d.name, d.symbol.to_uppercase()),
        format!("Price:  {}", format_price(d.current_price_usd)),
    ];
    if let Some(rank) = d.market_cap_rank {
        out.push(format!("Rank:   #{rank}"));
    }
    if let Some(change) = d.price_change_percentage_24h {
        out.push(format!("24h:    {}", format_change(Some(change))));
    }
    out.push(format!("ATH:    {}", format_price(d.ath_usd)));
    if let Some(home) = &d.homepage {
        out.push(format!("Web:    {home}"));
    }
    out
}

pub fn search_header(found: usize) -> String {
    format!(
        "--- Found {found} articles (showing {} latest) ---",
        found.min(LOOKUP_SHOWN)
    )
}

pub fn print_search(keyword: &str, articles: &[Article]) {
    if articles.is_empty() {
        println!("No news found for \"{keyword}\"");
        return;
    }
    println!("{}", search_header(articles.len()));
    for line in article_lines(articles, LOOKUP_SHOWN) {
        println!("{line}");
    }
}

pub fn print_coins(coins: &[Coin]) {
    for coin in coins {
        println!("{}", coin_line(coin));
    }
}

pub fn print_dashboard(board: &Dashboard) {
    println!("=== Top coins ===");
    if board.coins.is_empty() {
        println!("(unavailable)");
    }
    print_coins(&board.coins);

    println!();
    println!("=== Latest news ===");
    if board.news.is_empty() {
        println!("(unavailable)");
    }
    for a in &board.news {
        println!(
            "- {} [{}, {}]",
            a.title,
            a.source,
            a.published_at.format("%Y-%m-%d %H:%M")
        );
    }

    for f in &board.failures {
        eprintln!("warning: {} source failed: {}", f.source, f.message);
    }
}
