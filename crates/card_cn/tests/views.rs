use card_core::Point;
use card_paint::PaintCommand;
use card_state::{ProfileData, ProfileUpdate};
use card_text::EstimatedMeasurer;
use card_theme::ThemeName;

use card_cn::{
    card_scene, page_scene, CardEvent, CardScene, CardView, ElementKind, SliderAnimations, Spinner,
};

fn render_page(profile: &ProfileData, downloading: bool) -> CardScene {
    let sliders = SliderAnimations::new(profile.strengths());
    let view = CardView {
        profile,
        avatar: None,
        drag_active: false,
        sliders: &sliders,
        downloading,
        spinner: Spinner::default(),
    };
    page_scene(&view, &EstimatedMeasurer)
}

fn center_of(scene: &CardScene, id: &str) -> Point {
    let rect = scene.element(id).unwrap_or_else(|| panic!("missing {id}")).rect;
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

#[test]
fn seed_profile_renders_every_field() {
    let scene = render_page(&ProfileData::seed(), false);

    assert_eq!(scene.text_of("name-input"), Some("Aria Montgomery"));
    assert_eq!(scene.text_of("title-input"), Some("Product Designer"));
    assert_eq!(scene.text_of("strengths-heading"), Some("Strengths"));
    assert_eq!(scene.text_of("strengths-badge"), Some("Character Stats"));
    assert_eq!(scene.text_of("strength-executing-value"), Some("3"));
    assert_eq!(scene.text_of("strength-influencing-value"), Some("4"));
    assert_eq!(scene.text_of("strength-relationship-building-value"), Some("5"));
    assert_eq!(scene.text_of("strength-strategic-thinking-value"), Some("2"));
    assert_eq!(scene.text_of("download-button"), Some("Download PNG"));

    // Initials fallback instead of an image
    let avatar = scene.element("avatar").unwrap();
    assert_eq!(avatar.kind, ElementKind::Text);
    assert_eq!(avatar.text.as_deref(), Some("AM"));

    let painted: Vec<&str> = scene.painted_text().collect();
    assert!(painted.contains(&"Executing"));
    assert!(painted.contains(&"Succession Profile"));
}

#[test]
fn empty_fields_show_placeholders() {
    let profile = ProfileData::seed().merged(ProfileUpdate::default().name("").notes(""));
    let scene = render_page(&profile, false);

    let name = scene.element("name-input").unwrap();
    assert_eq!(name.text.as_deref(), Some(""));
    assert_eq!(name.placeholder.as_deref(), Some("Employee Name"));

    let painted: Vec<&str> = scene.painted_text().collect();
    assert!(painted.contains(&"Employee Name"));
    assert!(painted.contains(&"Manager's notes and development areas..."));
}

#[test]
fn only_active_theme_button_is_marked() {
    let profile = ProfileData::seed().merged(ProfileUpdate::default().theme(ThemeName::Verizon));
    let scene = render_page(&profile, false);

    let active: Vec<&str> = scene
        .elements
        .iter()
        .filter(|e| e.id.starts_with("theme-") && e.active)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(active, vec!["theme-verizon"]);
}

#[test]
fn clicks_route_to_events() {
    let scene = render_page(&ProfileData::seed(), false);

    let event = CardEvent::from_click(&scene, center_of(&scene, "theme-dark-mode"));
    assert!(matches!(event, Some(CardEvent::SelectTheme(ThemeName::DarkMode))));

    let event = CardEvent::from_click(&scene, center_of(&scene, "randomize-button"));
    assert!(matches!(event, Some(CardEvent::Randomize)));

    let event = CardEvent::from_click(&scene, center_of(&scene, "download-button"));
    assert!(matches!(event, Some(CardEvent::Download)));

    let event = CardEvent::from_click(&scene, center_of(&scene, "upload-button"));
    assert!(matches!(event, Some(CardEvent::OpenFilePicker)));

    // Focusing an input does nothing by itself
    assert!(CardEvent::from_click(&scene, center_of(&scene, "notes-input")).is_none());
}

#[test]
fn slider_click_maps_position_to_rating() {
    let scene = render_page(&ProfileData::seed(), false);
    let track = scene.element("strength-executing-slider").unwrap().rect;
    let y = track.y + track.height / 2.0;

    let right_end = CardEvent::from_click(&scene, Point::new(track.right() - 1.0, y));
    assert!(matches!(
        right_end,
        Some(CardEvent::SetStrength { ref id, value: 5 }) if id == "executing"
    ));

    let left_end = CardEvent::from_click(&scene, Point::new(track.x + 1.0, y));
    assert!(matches!(left_end, Some(CardEvent::SetStrength { value: 1, .. })));
}

#[test]
fn downloading_disables_the_download_button() {
    let scene = render_page(&ProfileData::seed(), true);

    let download = scene.element("download-button").unwrap();
    assert!(download.disabled);
    assert_eq!(download.text.as_deref(), Some("Generating..."));
    assert!(scene.element("download-button-spinner").is_some());
    assert!(CardEvent::from_click(&scene, center_of(&scene, "download-button")).is_none());
}

#[test]
fn card_scene_is_transparent_outside_the_card() {
    let profile = ProfileData::seed();
    let sliders = SliderAnimations::new(profile.strengths());
    let view = CardView {
        profile: &profile,
        avatar: None,
        drag_active: false,
        sliders: &sliders,
        downloading: false,
        spinner: Spinner::default(),
    };
    let scene = card_scene(&view, &EstimatedMeasurer);

    assert!(scene.background.is_none());
    assert!(!scene
        .commands
        .iter()
        .any(|cmd| matches!(cmd, PaintCommand::DrawShadow { rect, .. } if rect.width == scene.width)));
    // The card surface comes before any content
    assert!(matches!(scene.commands[0], PaintCommand::FillRoundedRect { .. }));
}

#[test]
fn slider_fill_follows_spring_toward_new_rating() {
    let seed = ProfileData::seed();
    let mut sliders = SliderAnimations::new(seed.strengths());
    let raised = seed.merged(ProfileUpdate::default().strength_values([5, 4, 5, 2]));
    sliders.sync(raised.strengths());
    sliders.tick(1.0 / 60.0);

    let mid = sliders.fraction(0);
    assert!(mid > 0.5 && mid < 1.0, "fill mid-flight was {mid}");
    assert!(sliders.is_animating());

    sliders.settle();
    assert_eq!(sliders.fraction(0), 1.0);
}
