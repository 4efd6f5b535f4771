//! Layout dispatch: slide record in, render tree out.
//!
//! [`dispatch`] is a total match over [`LayoutKind`]; adding a layout is a
//! compile error until it has a strategy here. Each strategy picks the
//! optional fields it shows and silently skips the ones that are absent.
//! The resulting [`SlideTree`] is plain comparable data; turning it into
//! terminal widgets is the view's job.

use crate::types::{LayoutKind, MediaKind, PortfolioSample, SlideRecord};

/// Number of profile items shown in the first ("Credits") group.
pub const PROFILE_LEAD_ITEMS: usize = 3;

/// Fallback eyebrow for finale slides without a secondary label.
pub const FINALE_DEFAULT_LABEL: &str = "Presented By";

// ============================================================================
// RENDER TREE
// ============================================================================

/// Horizontal alignment of a slide's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A numbered or labelled entry (grid cards, list rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labelled {
    pub label: String,
    pub text: String,
}

/// One gallery tile, in deck order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub sample_id: u32,
    pub label: String,
    pub title: String,
    pub kind: MediaKind,
    pub source: String,
}

/// A visual building block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Small caps label above a title.
    Eyebrow(String),
    Title(String),
    /// Oversized text that stands in for a title (profile name, contact name).
    Display(String),
    Subtitle(String),
    /// Accent separator line.
    Rule,
    /// Headed group of plain rows.
    Section { heading: String, items: Vec<String> },
    Checklist(Vec<String>),
    Numbered(Vec<Labelled>),
    Cards(Vec<Labelled>),
    /// Side-by-side boxed panels.
    Panels(Vec<Labelled>),
    Callout(String),
    Image { uri: String, caption: String },
    Link { label: String, uri: String },
    Gallery(Vec<Tile>),
}

/// Everything the view needs to draw one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideTree {
    pub layout: LayoutKind,
    /// Zero-padded slide id, e.g. `#07`.
    pub badge: String,
    pub align: Align,
    /// Content columns, left to right. Most layouts use one.
    pub columns: Vec<Vec<Element>>,
    /// Director's commentary, shown below the content.
    pub commentary: Option<String>,
}

impl SlideTree {
    /// All elements, column by column.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.columns.iter().flatten()
    }

    /// The gallery tiles, if this slide has a gallery.
    pub fn gallery(&self) -> Option<&[Tile]> {
        self.elements().find_map(|element| match element {
            Element::Gallery(tiles) => Some(tiles.as_slice()),
            _ => None,
        })
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Pick the strategy for `slide.layout` and build its render tree.
pub fn dispatch(slide: &SlideRecord) -> SlideTree {
    let (align, columns) = match slide.layout {
        LayoutKind::Hero => (Align::Left, vec![hero(slide)]),
        LayoutKind::Profile => (Align::Left, profile(slide)),
        LayoutKind::TextLeft => (Align::Left, vec![text_left(slide)]),
        LayoutKind::List => (Align::Left, vec![list(slide)]),
        LayoutKind::Grid => (Align::Left, vec![grid(slide)]),
        LayoutKind::Schedule => (Align::Center, vec![schedule(slide)]),
        LayoutKind::Center => (Align::Center, vec![center(slide)]),
        LayoutKind::Portfolio => (Align::Left, vec![portfolio(slide)]),
        LayoutKind::Finale => (Align::Center, vec![finale(slide)]),
    };

    SlideTree {
        layout: slide.layout,
        badge: format!("#{:02}", slide.id),
        align,
        columns,
        commentary: slide.mentor_comment.clone(),
    }
}

// ============================================================================
// STRATEGIES
// ============================================================================

fn hero(slide: &SlideRecord) -> Vec<Element> {
    let mut out = vec![
        Element::Eyebrow("Now Showing".to_string()),
        Element::Title(slide.title.clone()),
        Element::Rule,
    ];
    push_subtitle(&mut out, slide);
    out
}

fn profile(slide: &SlideRecord) -> Vec<Vec<Element>> {
    let mut identity = vec![Element::Eyebrow(slide.title.clone())];
    if let Some(name) = &slide.subtitle {
        identity.push(Element::Display(name.clone()));
    }
    if let Some(role) = &slide.highlight {
        identity.push(Element::Subtitle(role.clone()));
    }

    let items = slide.item_slice();
    let split = items.len().min(PROFILE_LEAD_ITEMS);
    let (credits, filmography) = items.split_at(split);

    let mut history = Vec::new();
    if !credits.is_empty() {
        history.push(Element::Section {
            heading: "Credits".to_string(),
            items: credits.to_vec(),
        });
    }
    if !filmography.is_empty() {
        history.push(Element::Section {
            heading: "Filmography".to_string(),
            items: filmography.to_vec(),
        });
    }

    vec![identity, history]
}

fn text_left(slide: &SlideRecord) -> Vec<Element> {
    let mut out = vec![Element::Title(slide.title.clone())];
    push_subtitle(&mut out, slide);
    if let Some(items) = non_empty_items(slide) {
        out.push(Element::Checklist(items.to_vec()));
    }
    out
}

fn list(slide: &SlideRecord) -> Vec<Element> {
    let mut out = vec![Element::Title(slide.title.clone()), Element::Rule];
    push_subtitle(&mut out, slide);
    if let Some(items) = non_empty_items(slide) {
        out.push(Element::Numbered(numbered(items, "")));
    }
    out
}

fn grid(slide: &SlideRecord) -> Vec<Element> {
    let mut out = vec![Element::Title(slide.title.clone())];
    push_subtitle(&mut out, slide);
    if let Some(items) = non_empty_items(slide) {
        out.push(Element::Cards(numbered(items, "SCENE ")));
    }
    out
}

fn schedule(slide: &SlideRecord) -> Vec<Element> {
    let mut panels = Vec::new();
    if let Some(period) = &slide.subtitle {
        panels.push(Labelled {
            label: "Date & Period".to_string(),
            text: period.clone(),
        });
    }
    if let Some(running) = &slide.highlight {
        panels.push(Labelled {
            label: "Running Time".to_string(),
            text: running.clone(),
        });
    }

    let mut out = vec![Element::Title(slide.title.clone())];
    if !panels.is_empty() {
        out.push(Element::Panels(panels));
    }
    out
}

fn center(slide: &SlideRecord) -> Vec<Element> {
    let mut out = vec![Element::Title(slide.title.clone())];
    push_subtitle(&mut out, slide);
    if let Some(highlight) = &slide.highlight {
        out.push(Element::Callout(highlight.clone()));
    }
    if let Some(uri) = slide.showcase().and_then(|s| s.image.as_ref()) {
        out.push(Element::Image {
            uri: uri.clone(),
            caption: "Scan to Save Contact".to_string(),
        });
    }
    out
}

fn portfolio(slide: &SlideRecord) -> Vec<Element> {
    let mut out = vec![Element::Title(slide.title.clone())];
    push_subtitle(&mut out, slide);

    let Some(data) = slide.portfolio() else {
        return out;
    };
    if let Some(link) = &data.link {
        out.push(Element::Link {
            label: "View Archive".to_string(),
            uri: link.clone(),
        });
    }
    if !data.samples.is_empty() {
        let tiles = data.samples.iter().enumerate().map(tile).collect();
        out.push(Element::Gallery(tiles));
    }
    out
}

fn finale(slide: &SlideRecord) -> Vec<Element> {
    let showcase = slide.showcase();
    let image = showcase.and_then(|s| s.image.as_ref());
    let label = showcase
        .and_then(|s| s.label.clone())
        .unwrap_or_else(|| FINALE_DEFAULT_LABEL.to_string());

    let mut out = vec![Element::Eyebrow(label)];

    match image {
        // Contact form: the subtitle's two lines replace the title.
        Some(uri) => {
            let mut lines = slide.subtitle.as_deref().unwrap_or("").lines();
            if let Some(role) = lines.next().filter(|l| !l.is_empty()) {
                out.push(Element::Subtitle(role.to_string()));
            }
            if let Some(name) = lines.next().filter(|l| !l.is_empty()) {
                out.push(Element::Display(name.to_string()));
            }
            out.push(Element::Rule);
            if let Some(contact) = &slide.highlight {
                out.push(Element::Panels(vec![Labelled {
                    label: "Direct Contact".to_string(),
                    text: contact.clone(),
                }]));
            }
            out.push(Element::Image {
                uri: uri.clone(),
                caption: "Save Contact".to_string(),
            });
        }
        None => {
            out.push(Element::Title(slide.title.clone()));
            out.push(Element::Rule);
            push_subtitle(&mut out, slide);
        }
    }

    out
}

// ============================================================================
// HELPERS
// ============================================================================

fn push_subtitle(out: &mut Vec<Element>, slide: &SlideRecord) {
    if let Some(subtitle) = &slide.subtitle {
        out.push(Element::Subtitle(subtitle.clone()));
    }
}

fn non_empty_items(slide: &SlideRecord) -> Option<&[String]> {
    Some(slide.item_slice()).filter(|items| !items.is_empty())
}

fn numbered(items: &[String], prefix: &str) -> Vec<Labelled> {
    items
        .iter()
        .enumerate()
        .map(|(idx, text)| Labelled {
            label: format!("{}{:02}", prefix, idx + 1),
            text: text.clone(),
        })
        .collect()
}

fn tile((idx, sample): (usize, &PortfolioSample)) -> Tile {
    Tile {
        sample_id: sample.id,
        label: format!("Project {:02}", idx + 1),
        title: sample.title.clone(),
        kind: sample.kind,
        source: sample.source.clone(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::course_slides;
    use crate::types::{ExtraData, PortfolioData, ShowcaseData};

    fn full_record(layout: LayoutKind) -> SlideRecord {
        SlideRecord::new(7, layout, "TITLE")
            .subtitle("first line\nsecond line")
            .highlight("HIGHLIGHT")
            .items(["a", "b", "c", "d", "e"])
            .mentor_comment("commentary")
    }

    fn item_derived(element: &Element) -> bool {
        matches!(
            element,
            Element::Section { .. } | Element::Checklist(_) | Element::Numbered(_) | Element::Cards(_)
        )
    }

    #[test]
    fn dispatch_is_deterministic_for_every_layout() {
        for layout in LayoutKind::ALL {
            let record = full_record(layout);
            assert_eq!(dispatch(&record), dispatch(&record), "layout {}", layout);
            assert_eq!(dispatch(&record).layout, layout);
        }
    }

    #[test]
    fn omitted_items_render_no_item_elements() {
        for layout in LayoutKind::ALL {
            let mut record = full_record(layout);
            record.items = None;
            let tree = dispatch(&record);
            assert!(
                !tree.elements().any(item_derived),
                "layout {} rendered item elements without items",
                layout
            );
        }
    }

    #[test]
    fn bare_record_renders_for_every_layout() {
        for layout in LayoutKind::ALL {
            let tree = dispatch(&SlideRecord::new(1, layout, "ONLY TITLE"));
            assert!(tree.commentary.is_none());
            assert!(!tree.elements().any(|e| matches!(e, Element::Subtitle(_))));
        }
    }

    #[test]
    fn profile_splits_items_three_and_rest() {
        let tree = dispatch(&full_record(LayoutKind::Profile));
        assert_eq!(tree.columns.len(), 2);
        assert_eq!(
            tree.columns[1],
            vec![
                Element::Section {
                    heading: "Credits".into(),
                    items: vec!["a".into(), "b".into(), "c".into()],
                },
                Element::Section {
                    heading: "Filmography".into(),
                    items: vec!["d".into(), "e".into()],
                },
            ]
        );
    }

    #[test]
    fn profile_with_two_items_has_no_second_group() {
        let record = full_record(LayoutKind::Profile).items(["x", "y"]);
        let tree = dispatch(&record);
        assert_eq!(tree.columns[1].len(), 1);
    }

    #[test]
    fn list_numbers_items_from_one() {
        let tree = dispatch(&full_record(LayoutKind::List));
        let rows = tree
            .elements()
            .find_map(|e| match e {
                Element::Numbered(rows) => Some(rows.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].label, "01");
        assert_eq!(rows[4].label, "05");
    }

    #[test]
    fn grid_labels_cards_as_scenes() {
        let tree = dispatch(&full_record(LayoutKind::Grid));
        let cards = tree
            .elements()
            .find_map(|e| match e {
                Element::Cards(cards) => Some(cards.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(cards[1].label, "SCENE 02");
        assert_eq!(cards[1].text, "b");
    }

    #[test]
    fn schedule_puts_subtitle_left_and_highlight_right() {
        let tree = dispatch(&full_record(LayoutKind::Schedule));
        let panels = tree
            .elements()
            .find_map(|e| match e {
                Element::Panels(p) => Some(p.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(panels[0].label, "Date & Period");
        assert_eq!(panels[1].text, "HIGHLIGHT");
        assert_eq!(tree.align, Align::Center);
    }

    #[test]
    fn center_shows_image_only_when_present() {
        let without = dispatch(&full_record(LayoutKind::Center));
        assert!(!without.elements().any(|e| matches!(e, Element::Image { .. })));

        let with = full_record(LayoutKind::Center).extra(ExtraData::Showcase(ShowcaseData {
            image: Some("https://qr.example.com/a.png".into()),
            label: None,
        }));
        assert!(dispatch(&with).elements().any(|e| matches!(e, Element::Image { .. })));
    }

    #[test]
    fn portfolio_link_is_optional() {
        let record = SlideRecord::new(1, LayoutKind::Portfolio, "OUTPUT").extra(
            ExtraData::Portfolio(PortfolioData { link: None, samples: vec![] }),
        );
        let tree = dispatch(&record);
        assert!(!tree.elements().any(|e| matches!(e, Element::Link { .. })));
        assert!(tree.gallery().is_none());
    }

    #[test]
    fn portfolio_gallery_keeps_sample_order() {
        let slides = course_slides();
        let tree = dispatch(&slides[11]);
        let tiles = tree.gallery().expect("gallery");
        let ids: Vec<u32> = tiles.iter().map(|t| t.sample_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(tiles[0].label, "Project 01");
    }

    #[test]
    fn finale_without_contact_shows_title_and_subtitle_block() {
        let record = full_record(LayoutKind::Finale);
        let tree = dispatch(&record);
        let elements: Vec<&Element> = tree.elements().collect();
        assert_eq!(elements[0], &Element::Eyebrow(FINALE_DEFAULT_LABEL.into()));
        assert!(elements.contains(&&Element::Title("TITLE".into())));
        assert!(elements.contains(&&Element::Subtitle("first line\nsecond line".into())));
        assert!(!elements.iter().any(|e| matches!(e, Element::Panels(_))));
    }

    #[test]
    fn finale_with_contact_uses_two_line_form() {
        let record = full_record(LayoutKind::Finale).extra(ExtraData::Showcase(ShowcaseData {
            image: Some("https://qr.example.com/a.png".into()),
            label: Some("YOUR CREATIVE PARTNER".into()),
        }));
        let tree = dispatch(&record);
        let elements: Vec<&Element> = tree.elements().collect();
        assert_eq!(elements[0], &Element::Eyebrow("YOUR CREATIVE PARTNER".into()));
        assert_eq!(elements[1], &Element::Subtitle("first line".into()));
        assert_eq!(elements[2], &Element::Display("second line".into()));
        assert!(!elements.contains(&&Element::Title("TITLE".into())));
        assert!(elements.iter().any(|e| matches!(e, Element::Panels(p) if p[0].text == "HIGHLIGHT")));
    }

    #[test]
    fn badge_is_zero_padded_id() {
        assert_eq!(dispatch(&full_record(LayoutKind::Hero)).badge, "#07");
    }

    #[test]
    fn built_in_deck_dispatches_without_gaps() {
        for slide in course_slides() {
            let tree = dispatch(&slide);
            assert!(!tree.columns.is_empty());
            assert!(tree.commentary.is_some());
        }
    }
}
