use url::Url;

use crate::{
    coins::{
        model::{Coin, CoinDetail},
        wire,
    },
    core::{
        TrackerClient, TrackerError,
        conversions::{f64_to_decimal, opt_f64_to_decimal, parse_rfc3339},
        net,
    },
};

/// CoinGecko rejects `per_page` above this.
pub(crate) const MAX_PER_PAGE: u32 = 250;

pub(super) fn markets_url(client: &TrackerClient, per_page: u32) -> Result<Url, TrackerError> {
    let mut url = client.base_markets().join("coins/markets")?;
    url.query_pairs_mut()
        .append_pair("vs_currency", "usd")
        .append_pair("order", "market_cap_desc")
        .append_pair("per_page", &per_page.to_string())
        .append_pair("page", "1")
        .append_pair("sparkline", "false");
    Ok(url)
}

pub(super) fn detail_url(client: &TrackerClient, coin_id: &str) -> Result<Url, TrackerError> {
    let mut url = client.base_markets().join("coins/")?;
    url.path_segments_mut()
        .map_err(|()| TrackerError::Config("market-data base URL cannot carry a path".into()))?
        .pop_if_empty()
        .push(coin_id);
    url.query_pairs_mut()
        .append_pair("localization", "false")
        .append_pair("tickers", "false")
        .append_pair("community_data", "false")
        .append_pair("developer_data", "false");
    Ok(url)
}

pub(super) fn check_per_page(limit: u32) -> Result<u32, TrackerError> {
    if limit == 0 || limit > MAX_PER_PAGE {
        return Err(TrackerError::InvalidParams(format!(
            "coin limit must be between 1 and {MAX_PER_PAGE}, got {limit}"
        )));
    }
    Ok(limit)
}

pub(super) async fn fetch_markets(
    client: &TrackerClient,
    limit: u32,
) -> Result<Vec<Coin>, TrackerError> {
    let url = markets_url(client, limit)?;
    let resp = net::get(client, url).await?;
    if !resp.is_success() {
        return Err(resp.into_status_error());
    }

    let rows: Vec<wire::RawMarketCoin> = serde_json::from_str(&resp.body)?;
    rows.into_iter()
        .take(limit as usize)
        .enumerate()
        .map(|(idx, raw)| coin_from_wire(idx, raw))
        .collect()
}

pub(super) async fn fetch_detail(
    client: &TrackerClient,
    coin_id: &str,
) -> Result<CoinDetail, TrackerError> {
    let url = detail_url(client, coin_id)?;
    let resp = net::get(client, url).await?;
    if !resp.is_success() {
        return Err(resp.into_status_error());
    }

    // Some gateways answer 200 with an error body for unknown ids.
    if let Ok(wire::RawErrorBody { error: Some(msg) }) =
        serde_json::from_str::<wire::RawErrorBody>(&resp.body)
    {
        return Err(TrackerError::Data(format!("coin `{coin_id}`: {msg}")));
    }

    let raw: wire::RawCoinDetail = serde_json::from_str(&resp.body)?;
    detail_from_wire(raw)
}

fn coin_from_wire(idx: usize, raw: wire::RawMarketCoin) -> Result<Coin, TrackerError> {
    let missing = |field: &str| TrackerError::Data(format!("coin #{idx} is missing `{field}`"));

    let id = non_empty(raw.id).ok_or_else(|| missing("id"))?;
    let name = non_empty(raw.name).ok_or_else(|| missing("name"))?;
    let symbol = non_empty(raw.symbol).ok_or_else(|| missing("symbol"))?;
    let current_price =
        opt_f64_to_decimal(raw.current_price).ok_or_else(|| missing("current_price"))?;

    Ok(Coin {
        id,
        name,
        symbol,
        current_price,
        price_change_percentage_24h: opt_f64_to_decimal(raw.price_change_percentage_24h),
        market_cap: opt_f64_to_decimal(raw.market_cap),
        market_cap_rank: raw.market_cap_rank,
        high_24h: opt_f64_to_decimal(raw.high_24h),
        low_24h: opt_f64_to_decimal(raw.low_24h),
        ath: opt_f64_to_decimal(raw.ath),
    })
}

fn detail_from_wire(raw: wire::RawCoinDetail) -> Result<CoinDetail, TrackerError> {
    let missing = |field: &str| TrackerError::Data(format!("coin detail is missing `{field}`"));

    let id = non_empty(raw.id).ok_or_else(|| missing("id"))?;
    let name = non_empty(raw.name).ok_or_else(|| missing("name"))?;
    let symbol = non_empty(raw.symbol).ok_or_else(|| missing("symbol"))?;

    let usd = |m: Option<&wire::CurrencyMap>| {
        m.and_then(|m| m.get("usd").copied().flatten())
            .and_then(f64_to_decimal)
    };
    let md = raw.market_data.as_ref();

    Ok(CoinDetail {
        id,
        name,
        symbol,
        market_cap_rank: raw.market_cap_rank,
        current_price_usd: usd(md.and_then(|m| m.current_price.as_ref())),
        market_cap_usd: usd(md.and_then(|m| m.market_cap.as_ref())),
        high_24h_usd: usd(md.and_then(|m| m.high_24h.as_ref())),
        low_24h_usd: usd(md.and_then(|m| m.low_24h.as_ref())),
        ath_usd: usd(md.and_then(|m| m.ath.as_ref())),
        price_change_percentage_24h: opt_f64_to_decimal(
            md.and_then(|m| m.price_change_percentage_24h),
        ),
        homepage: raw
            .links
            .and_then(|l| l.homepage.into_iter().find_map(non_empty)),
        description: raw
            .description
            .and_then(|mut d| d.remove("en").flatten())
            .and_then(|d| non_empty(Some(d))),
        last_updated: raw.last_updated.as_deref().and_then(parse_rfc3339),
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
