//! Stylesheet for the two-column résumé layout. Sizes are in points.

use super::document::Style;

const INK: &str = "#333";
const MUTED: &str = "#7f8c8d";
const ON_THEME: &str = "#ecf0f1";

fn s(f: impl FnOnce(&mut Style)) -> Style {
    let mut style = Style::default();
    f(&mut style);
    style
}

pub fn page() -> Style {
    s(|st| {
        st.flex_direction = Some("row".into());
        st.background_color = Some("#FFFFFF".into());
        st.font_family = Some("Helvetica".into());
    })
}

pub fn left_column(theme: &str) -> Style {
    s(|st| {
        st.width = Some("30%".into());
        st.height = Some("100%".into());
        st.color = Some("white".into());
        st.padding = Some(20.0);
    })
    .background(theme)
}

pub fn right_column() -> Style {
    s(|st| {
        st.width = Some("70%".into());
        st.height = Some("100%".into());
        st.padding = Some(30.0);
    })
}

pub fn avatar() -> Style {
    s(|st| {
        st.width = Some("80".into());
        st.height = Some("80".into());
        st.border_radius = Some(40.0);
        st.margin_bottom = Some(20.0);
        st.align_self = Some("center".into());
        st.object_fit = Some("cover".into());
    })
}

pub fn header_block() -> Style {
    s(|st| st.margin_bottom = Some(20.0))
}

pub fn name(theme: &str) -> Style {
    s(|st| {
        st.font_size = Some(26.0);
        st.font_weight = Some("bold".into());
        st.margin_bottom = Some(5.0);
        st.text_transform = Some("uppercase".into());
    })
    .color(theme)
}

pub fn role() -> Style {
    s(|st| {
        st.font_size = Some(12.0);
        st.color = Some(MUTED.into());
        st.margin_bottom = Some(20.0);
        st.letter_spacing = Some(1.5);
        st.text_transform = Some("uppercase".into());
    })
}

pub fn section_title_left() -> Style {
    s(|st| {
        st.font_size = Some(11.0);
        st.font_weight = Some("bold".into());
        st.color = Some(ON_THEME.into());
        st.margin_bottom = Some(10.0);
        st.margin_top = Some(20.0);
        st.text_transform = Some("uppercase".into());
        st.border_bottom_width = Some(1.0);
        st.border_bottom_color = Some("rgba(255,255,255,0.2)".into());
        st.padding_bottom = Some(5.0);
    })
}

pub fn section_title_right() -> Style {
    s(|st| {
        st.font_size = Some(13.0);
        st.font_weight = Some("bold".into());
        st.color = Some("#2c3e50".into());
        st.margin_bottom = Some(10.0);
        st.border_bottom_width = Some(1.0);
        st.border_bottom_color = Some("#eee".into());
        st.padding_bottom = Some(5.0);
        st.text_transform = Some("uppercase".into());
    })
}

pub fn text_left() -> Style {
    s(|st| {
        st.font_size = Some(9.0);
        st.line_height = Some(1.6);
        st.color = Some(ON_THEME.into());
        st.margin_bottom = Some(4.0);
    })
}

pub fn text_right() -> Style {
    s(|st| {
        st.font_size = Some(10.0);
        st.line_height = Some(1.6);
        st.color = Some(INK.into());
        st.margin_bottom = Some(6.0);
        st.text_align = Some("justify".into());
    })
}

pub fn education_block() -> Style {
    s(|st| st.margin_bottom = Some(8.0))
}

pub fn education_course() -> Style {
    s(|st| {
        st.font_weight = Some("bold".into());
        st.color = Some("white".into());
        st.font_size = Some(9.0);
    })
}

pub fn experience_block() -> Style {
    s(|st| st.margin_bottom = Some(12.0))
}

pub fn experience_header() -> Style {
    s(|st| {
        st.flex_direction = Some("row".into());
        st.justify_content = Some("space-between".into());
        st.margin_bottom = Some(2.0);
    })
}

pub fn experience_company(theme: &str) -> Style {
    s(|st| {
        st.font_size = Some(11.0);
        st.font_weight = Some("bold".into());
    })
    .color(theme)
}

pub fn experience_period() -> Style {
    s(|st| {
        st.font_size = Some(9.0);
        st.color = Some(MUTED.into());
        st.margin_bottom = Some(4.0);
    })
}

pub fn experience_role() -> Style {
    s(|st| {
        st.font_size = Some(10.0);
        st.font_weight = Some("bold".into());
        st.margin_bottom = Some(2.0);
    })
}

pub fn empty_marker() -> Style {
    s(|st| {
        st.font_size = Some(10.0);
        st.color = Some("#999".into());
    })
}
