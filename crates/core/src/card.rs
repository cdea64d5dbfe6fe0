use crate::pokemon::{CardSummary, PokemonStub};

/// Render a single card as an HTML fragment
///
/// Pure function: the same summary always produces byte-identical
/// markup. Text fields are entity-escaped and the image URL is escaped
/// for attribute position.
pub fn render_card(summary: &CardSummary) -> String {
    let image = html_escape::encode_double_quoted_attribute(&summary.image);
    let subtitle = html_escape::encode_text(&summary.subtitle);
    let title = html_escape::encode_text(&summary.title);

    format!(
        r#"<li class="card">
    <img src="{image}" alt="">
    <div class="card-content">
        <p class="subheader">{subtitle}</p>
        <h3 class="header">{title}</h3>
    </div>
</li>
"#
    )
}

/// Render many cards as one fragment
///
/// Order-preserving concatenation of [`render_card`] output, with no
/// separators between fragments.
pub fn render_cards(summaries: &[CardSummary]) -> String {
    summaries.iter().map(render_card).collect()
}

/// Render dropdown options for a roster
///
/// Each stub becomes one `<option>` whose visible label is the name
/// and whose value is the detail URL.
pub fn render_options(stubs: &[PokemonStub]) -> String {
    stubs
        .iter()
        .map(|stub| {
            format!(
                "<option value=\"{}\">{}</option>\n",
                html_escape::encode_double_quoted_attribute(&stub.url),
                html_escape::encode_text(&stub.name),
            )
        })
        .collect()
}
