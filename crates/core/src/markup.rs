use std::borrow::Cow;

use crate::images::SimplifiedImage;
use crate::page::Layout;

/// Where users can get an API key
pub const API_DOCS_URL: &str = "https://pixabay.com/api/docs/";

fn attribute(value: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        html_escape::encode_double_quoted_attribute(value)
    } else {
        Cow::Borrowed(value)
    }
}

/// Render one image as a link wrapping an `<img>`
///
/// Values are interpolated verbatim unless `escape` is set, so a crafted
/// `alt` or `link` can break out of its attribute.
pub fn convert_to_markup(image: &SimplifiedImage, layout: Layout, escape: bool) -> String {
    format!(
        r#"
  <a href="{link}" class="{link_class}">
    <img src="{src}" alt="{alt}" class="{image_class}" />
  </a>
"#,
        link = attribute(&image.link, escape),
        src = attribute(&image.src, escape),
        alt = attribute(&image.alt, escape),
        link_class = layout.class("link"),
        image_class = layout.class("image"),
    )
}

/// Concatenate the markup of every image, in order
pub fn render_images(images: &[SimplifiedImage], layout: Layout, escape: bool) -> String {
    images
        .iter()
        .map(|image| convert_to_markup(image, layout, escape))
        .collect()
}

/// Fragment shown in the container when the page URL carries no API key
pub fn missing_key_fragment(layout: Layout) -> String {
    format!(
        r#"
      <p class="{}">
        A key is required in the URL (e.g. ?key=MY_API_KEY). Get an API key
        from <a href="{API_DOCS_URL}">Pixabay</a>.
      </p>
    "#,
        layout.class("error")
    )
}
