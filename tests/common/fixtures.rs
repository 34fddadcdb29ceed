//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use opengadget_rs::core::spec::GadgetSpec;
use serde_json::{Value, json};

/// Factory for creating gadget specs
pub struct SpecFactory;

impl SpecFactory {
    /// A spec with nothing but a title
    pub fn minimal() -> GadgetSpec {
        serde_json::from_value(Self::minimal_json()).unwrap()
    }

    /// Raw JSON body of the minimal spec, for serving over HTTP
    pub fn minimal_json() -> Value {
        json!({
            "modulePrefs": {"title": "Hello World"}
        })
    }

    /// A fully populated weather gadget spec
    pub fn weather() -> GadgetSpec {
        serde_json::from_value(Self::weather_json()).unwrap()
    }

    /// Raw JSON body of the weather spec, for serving over HTTP
    pub fn weather_json() -> Value {
        json!({
            "modulePrefs": {
                "title": "Weather Report",
                "titleUrl": "http://example.org/weather/about",
                "directoryTitle": "Weather",
                "author": "Jane Doe",
                "authorEmail": "jane@example.org",
                "thumbnail": "http://example.org/weather/thumb.png",
                "categories": ["news", "weather"],
                "height": 200,
                "width": 320,
                "showInDirectory": true,
                "scrolling": true,
                "features": [
                    {"name": "views"},
                    {"name": "setprefs", "required": false, "params": {"hint": ["compact"]}}
                ],
                "links": [
                    {"rel": "gadgets.help", "href": "http://example.org/weather/help.html"}
                ]
            },
            "userPrefs": [
                {
                    "name": "unit",
                    "displayName": "Unit",
                    "dataType": "enum",
                    "defaultValue": "c",
                    "enumValues": [
                        {"value": "c", "displayValue": "Celsius"},
                        {"value": "f", "displayValue": "Fahrenheit"}
                    ]
                },
                {"name": "city", "defaultValue": "Dublin"}
            ],
            "views": {
                "default": {"type": "html", "preferredHeight": 180},
                "canvas": {"type": "URL", "quirks": true}
            }
        })
    }
}

/// Factory for creating metadata batch request bodies
pub struct BatchFactory;

impl BatchFactory {
    /// A batch naming one gadget with module id 1
    pub fn single(url: &str) -> Value {
        Self::of_urls(&[url])
    }

    /// A batch naming the given gadgets with module ids 1, 2, ...
    pub fn of_urls(urls: &[&str]) -> Value {
        let gadgets: Vec<Value> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| json!({"url": url, "moduleId": (i + 1) as u64}))
            .collect();

        json!({
            "context": {},
            "gadgets": gadgets
        })
    }

    /// A batch with an explicit shared context
    pub fn with_context(urls: &[&str], context: Value) -> Value {
        let mut batch = Self::of_urls(urls);
        batch["context"] = context;
        batch
    }
}
