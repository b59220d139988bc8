//! Human-readable rendering of a [`LocationReport`]

use colored::Colorize;

use super::formatters::{
    format_area, format_inverse_rate, format_local_time, format_population, format_utc_offset,
};
use super::table::format_table;
use crate::client::models::{Country, CurrencyRates, NewsItem, WeatherInfo};
use crate::error::ReadError;
use crate::models::{FieldRow, NewsDisplay};
use crate::report::{LocationReport, Section};

pub fn render(report: &LocationReport) -> String {
    let country = &report.country;
    let mut out = Vec::new();

    out.push(
        format!("{} ({})", country.name, country.alpha2code)
            .bold()
            .to_string(),
    );
    out.push(String::new());

    out.push(heading("General"));
    out.push(format_table(&general_rows(
        country,
        &report.currency_rates,
        &report.weather,
    )));

    out.push(String::new());
    out.push(heading("Weather"));
    out.push(match &report.weather {
        Ok(weather) => format_table(&weather_rows(weather)),
        Err(e) => unavailable(e),
    });

    out.push(String::new());
    out.push(heading("News"));
    out.push(match &report.news {
        Ok(items) if items.is_empty() => "No recent news.".to_string(),
        Ok(items) => format_table(&news_rows(items)),
        Err(e) => unavailable(e),
    });

    out.join("\n")
}

fn heading(title: &str) -> String {
    title.bold().underline().to_string()
}

fn unavailable(err: &ReadError) -> String {
    format!("{} unavailable: {}", "⚠".yellow(), err)
}

fn general_rows(
    country: &Country,
    rates: &Section<CurrencyRates>,
    weather: &Section<WeatherInfo>,
) -> Vec<FieldRow> {
    let mut rows = vec![
        FieldRow::new("Capital", display_or_dash(&country.capital)),
        FieldRow::new(
            "Coordinates",
            format!("{:.2}, {:.2}", country.latitude, country.longitude),
        ),
        FieldRow::new("Subregion", display_or_dash(&country.subregion)),
        FieldRow::new("Languages", languages(country)),
        FieldRow::new("Area", format_area(country.area)),
        FieldRow::new("Population", format_population(country.population)),
    ];

    match rates {
        Ok(rates) if rates.rates.is_empty() => {
            rows.push(FieldRow::new("Currency", "no rate for local currency"))
        }
        Ok(rates) => {
            for (code, rate) in &rates.rates {
                let value = match format_inverse_rate(*rate) {
                    Some(price) => format!("1 {} = {} {} ({})", code, price, rates.base, rates.date),
                    None => format!("no usable rate for {}", code),
                };
                rows.push(FieldRow::new("Currency", value));
            }
        }
        Err(e) => rows.push(FieldRow::new("Currency", format!("unavailable: {}", e))),
    }

    let offset = match weather {
        Ok(weather) => format_utc_offset(weather.utc_timezone),
        Err(_) => country.timezones.join(", "),
    };
    rows.push(FieldRow::new("Time zone", display_or_dash(&offset)));

    rows
}

fn weather_rows(weather: &WeatherInfo) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Conditions", weather.description.clone()),
        FieldRow::new("Temperature", format!("{:.1} °C", weather.temp)),
        FieldRow::new("Wind", format!("{:.1} m/s", weather.wind_speed)),
        FieldRow::new("Humidity", format!("{} %", weather.humidity)),
        FieldRow::new("Pressure", format!("{} hPa", weather.pressure)),
        FieldRow::new("Visibility", format!("{} m", weather.visibility)),
        FieldRow::new(
            "Observed",
            format_local_time(weather.date_time, weather.utc_timezone),
        ),
    ]
}

fn news_rows(items: &[NewsItem]) -> Vec<NewsDisplay> {
    items.iter().map(NewsDisplay::from).collect()
}

fn languages(country: &Country) -> String {
    let names: Vec<String> = country
        .languages
        .iter()
        .map(|l| {
            if l.native_name.is_empty() || l.native_name == l.name {
                l.name.clone()
            } else {
                format!("{} ({})", l.name, l.native_name)
            }
        })
        .collect();
    display_or_dash(&names.join(", "))
}

fn display_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
