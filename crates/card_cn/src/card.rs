//! Whole-card and whole-page scenes

use card_core::{Point, Rect};
use card_paint::{Bitmap, Gradient, Shadow};
use card_state::ProfileData;
use card_text::TextMeasurer;
use card_theme::lookup;

use crate::components::{
    notes, profile_actions, profile_header, strengths_section, theme_switcher, HeaderProps,
    SliderAnimations, Spinner,
};
use crate::layout::{CARD_PADDING, CARD_RADIUS, CARD_WIDTH, CONTENT_WIDTH, PAGE_PADDING, PAGE_WIDTH, SECTION_GAP};
use crate::scene::{CardScene, Element, ElementKind, SceneBuilder};

/// Everything the views read
pub struct CardView<'a> {
    pub profile: &'a ProfileData,
    pub avatar: Option<Bitmap>,
    pub drag_active: bool,
    pub sliders: &'a SliderAnimations,
    pub downloading: bool,
    pub spinner: Spinner,
}

/// The card alone, at the origin, over a clear backdrop. This is what gets
/// exported.
pub fn card_scene(view: &CardView<'_>, measurer: &dyn TextMeasurer) -> CardScene {
    let theme = lookup(view.profile.theme);
    let mut builder = SceneBuilder::new(theme, measurer);
    let height = paint_card(&mut builder, view, Point::new(0.0, 0.0), false);
    builder.finish(CARD_WIDTH, height, None)
}

/// The full page: theme switcher, card, and action row
pub fn page_scene(view: &CardView<'_>, measurer: &dyn TextMeasurer) -> CardScene {
    let theme = lookup(view.profile.theme);
    let mut builder = SceneBuilder::new(theme, measurer);
    let center_x = PAGE_WIDTH / 2.0;

    let mut y = PAGE_PADDING;
    y += theme_switcher(&mut builder, view.profile.theme, center_x, y);
    y += SECTION_GAP;
    y += paint_card(&mut builder, view, Point::new(PAGE_PADDING, y), true);
    y += SECTION_GAP;
    y += profile_actions(&mut builder, view.downloading, view.spinner, center_x, y);
    y += PAGE_PADDING;

    builder.finish(PAGE_WIDTH, y, Some(theme.background))
}

/// Paint the card with its top-left at `origin`. Returns its height.
fn paint_card(
    builder: &mut SceneBuilder<'_>,
    view: &CardView<'_>,
    origin: Point,
    with_shadow: bool,
) -> f32 {
    let theme = builder.theme();
    let x = origin.x + CARD_PADDING;
    let mut y = origin.y + CARD_PADDING;

    // Content goes on a layer so the card height is known before painting
    // the surface underneath it
    let mut content = builder.layer();
    y += profile_header(
        &mut content,
        HeaderProps {
            profile: view.profile,
            avatar: view.avatar.clone(),
            drag_active: view.drag_active,
        },
        x,
        y,
        CONTENT_WIDTH,
    );
    y += SECTION_GAP;
    y += strengths_section(
        &mut content,
        view.profile.strengths(),
        view.sliders,
        x,
        y,
        CONTENT_WIDTH,
    );
    y += SECTION_GAP;
    y += notes(&mut content, &view.profile.notes, x, y, CONTENT_WIDTH);

    let height = y + CARD_PADDING - origin.y;
    let card = Rect::new(origin.x, origin.y, CARD_WIDTH, height);

    if with_shadow {
        builder.ctx.draw_shadow(card, CARD_RADIUS, Shadow::xl());
    }
    builder.ctx.fill_rounded_rect(
        card.x,
        card.y,
        card.width,
        card.height,
        CARD_RADIUS,
        theme.card,
    );
    let border = Gradient::linear(
        Point::new(card.x, card.y),
        Point::new(card.right(), card.bottom()),
        &theme.border.colors,
    );
    builder
        .ctx
        .stroke_rounded_rect(card, CARD_RADIUS, theme.border.width, border);
    builder.push(Element::new("card", ElementKind::Container, card));

    builder.merge(content);
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_text::EstimatedMeasurer;

    fn view_of<'a>(profile: &'a ProfileData, sliders: &'a SliderAnimations) -> CardView<'a> {
        CardView {
            profile,
            avatar: None,
            drag_active: false,
            sliders,
            downloading: false,
            spinner: Spinner::default(),
        }
    }

    #[test]
    fn test_card_scene_excludes_page_chrome() {
        let profile = ProfileData::seed();
        let sliders = SliderAnimations::new(profile.strengths());
        let scene = card_scene(&view_of(&profile, &sliders), &EstimatedMeasurer);

        assert!(scene.element("card").is_some());
        assert!(scene.element("name-input").is_some());
        assert!(scene.element("notes-input").is_some());
        assert!(scene.element("theme-switcher").is_none());
        assert!(scene.element("download-button").is_none());
        assert_eq!(scene.background, None);
        assert_eq!(scene.element("card").map(|e| e.rect.height), Some(scene.height));
    }

    #[test]
    fn test_page_scene_contains_card_below_switcher() {
        let profile = ProfileData::seed();
        let sliders = SliderAnimations::new(profile.strengths());
        let scene = page_scene(&view_of(&profile, &sliders), &EstimatedMeasurer);

        let switcher = scene.element("theme-switcher").unwrap();
        let card = scene.element("card").unwrap();
        let actions = scene.element("profile-actions").unwrap();
        assert!(card.rect.y > switcher.rect.bottom());
        assert!(actions.rect.y > card.rect.bottom());
        assert!(scene.height > actions.rect.bottom());
    }
}
