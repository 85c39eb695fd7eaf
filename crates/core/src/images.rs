use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Size token Pixabay embeds in `webformatURL`, and the smaller one we swap in
pub const LARGE_SIZE_TOKEN: &str = "_640";
pub const SMALL_SIZE_TOKEN: &str = "_340";

/// Pixabay search response
///
/// Only the fields the pipeline reads are modelled. `hits` is required; a
/// `null` hit reads as an entry with every field missing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(rename = "totalHits", default)]
    pub total_hits: Option<u64>,
    #[serde(deserialize_with = "nullable_hits")]
    pub hits: Vec<RawImageEntry>,
}

/// Single hit as returned by the API
///
/// Fields never fail to deserialize: strings are kept, other scalars are
/// stringified, and `null`, missing or structured values read as `None`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawImageEntry {
    #[serde(rename = "webformatURL", default, deserialize_with = "lenient_string")]
    pub webformat_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tags: Option<String>,
    #[serde(rename = "pageURL", default, deserialize_with = "lenient_string")]
    pub page_url: Option<String>,
}

fn nullable_hits<'de, D>(deserializer: D) -> Result<Vec<RawImageEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let hits = Vec::<Option<RawImageEntry>>::deserialize(deserializer)?;
    Ok(hits.into_iter().map(Option::unwrap_or_default).collect())
}

struct LenientString;

impl<'de> Visitor<'de> for LenientString {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, a scalar or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientString)
}

/// The three fields needed to render an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedImage {
    pub src: String,
    pub alt: String,
    pub link: String,
}

/// Convert a full Pixabay image entry into a simplified image
pub fn simplify_image(entry: RawImageEntry) -> SimplifiedImage {
    SimplifiedImage {
        src: entry.webformat_url.unwrap_or_default(),
        alt: entry.tags.unwrap_or_default(),
        link: entry.page_url.unwrap_or_default(),
    }
}

/// Point `src` at the smaller image variant
///
/// Only the first size token is replaced.
pub fn transform_image_size(image: SimplifiedImage) -> SimplifiedImage {
    SimplifiedImage {
        src: image.src.replacen(LARGE_SIZE_TOKEN, SMALL_SIZE_TOKEN, 1),
        ..image
    }
}

/// Simplify every hit, keeping the response order
pub fn get_images(hits: Vec<RawImageEntry>) -> Vec<SimplifiedImage> {
    hits.into_iter()
        .map(simplify_image)
        .map(transform_image_size)
        .collect()
}
