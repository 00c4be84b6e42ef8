use tracing::info;

use crate::{
    aggregate::humidity_by_weekday,
    annotate::annotate_weekdays,
    error::Result,
    model::{UmbrellaDays, UmbrellaRequest},
    select::select_umbrella_days,
    source::ForecastSource,
    url::build_url_with_base,
};

/// Run the whole pipeline once: build the URL, fetch the forecast, annotate
/// weekdays, group humidity and pick the umbrella days.
///
/// Any stage failing aborts the run; there are no partial results.
pub async fn recommend(
    source: &dyn ForecastSource,
    base_url: &str,
    request: &UmbrellaRequest,
) -> Result<UmbrellaDays> {
    let url = build_url_with_base(base_url, &request.city, &request.country, &request.api_key)?;

    let forecast = source.fetch_json(&url).await?;
    let annotated = annotate_weekdays(&forecast)?;
    let humidity = humidity_by_weekday(&annotated)?;
    let days = select_umbrella_days(request.today, &humidity);

    info!(city = %request.city, today = %request.today, days = ?days.names(), "umbrella days selected");
    Ok(days)
}
