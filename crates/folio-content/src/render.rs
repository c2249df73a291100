#![forbid(unsafe_code)]

//! Static page rendering.
//!
//! [`StaticContentRenderer::render`] is a pure function of the compiled-in
//! content and a [`PageView`]: the same view always produces the same tree.
//!
//! Revealable nodes are marked with the `scroll-animate` class while the
//! tree is built. A final pass walks the tree in document order, assigns
//! each of them an [`ElementId`], records its 1-based position among its
//! parent's element children (the `nth-child` index the stagger uses), and
//! writes the inline reveal style for its current phase.

use std::time::Duration;

use folio_core::event::ClickTarget;
use folio_core::section::Section;
use folio_runtime::stagger::{StaggerPolicy, css_seconds};
use folio_runtime::style::{self, StyleDecl, reveal_style};
use folio_runtime::{ElementId, RevealConfig, RevealPhase, RevealSnapshot};

use crate::data::{
    ACHIEVEMENTS, ADDITIONAL_TECH, Gradient, IconKind, PROFILE, PROJECTS, Project, SKILLS, Skill,
    SocialLink,
};
use crate::markup::{Element, Node, el};
use crate::stylesheet::stylesheet;

/// Class marking a node for scroll-triggered reveal.
pub const REVEAL_CLASS: &str = "scroll-animate";
/// Class added once a node is revealed.
pub const REVEALED_CLASS: &str = "animate-in";

const PAGE_TITLE: &str = "Utkarsh Singh | Portfolio";
const PARALLAX_PRESETS: usize = 3;

/// Everything the renderer needs besides the static content.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub reveal: RevealSnapshot,
    pub menu_open: bool,
}

impl PageView {
    #[must_use]
    pub fn new(reveal: RevealSnapshot, menu_open: bool) -> Self {
        Self { reveal, menu_open }
    }
}

/// A revealable node found while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSlot {
    pub id: ElementId,
    /// 1-based position among the parent's element children.
    pub sibling_index: u32,
    /// Enclosing page section.
    pub section: Option<Section>,
}

/// Output of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// The page body's root element.
    pub root: Element,
    /// Revealable nodes in document order.
    pub revealables: Vec<RevealSlot>,
}

impl RenderedPage {
    /// Serialize the body content.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

/// Renders the portfolio page.
#[derive(Debug, Clone)]
pub struct StaticContentRenderer {
    config: RevealConfig,
    stagger: StaggerPolicy,
    stylesheet: String,
}

impl Default for StaticContentRenderer {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

impl StaticContentRenderer {
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            stagger: config.to_stagger_policy(),
            stylesheet: stylesheet(&config),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    #[must_use]
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Render the page body.
    #[must_use]
    pub fn render(&self, view: &PageView) -> RenderedPage {
        let mut root = el("div")
            .class("page")
            .child(cursor_follower(&view.reveal))
            .child(backdrop(&view.reveal))
            .child(navigation(view.menu_open))
            .children(Section::PAGE_ORDER.map(section))
            .child(footer());

        let mut pass = RevealPass {
            renderer: self,
            view,
            next_id: 1,
            slots: Vec::new(),
        };
        pass.visit(&mut root, None);

        RenderedPage {
            root,
            revealables: pass.slots,
        }
    }

    /// Render a complete HTML document, stylesheet included.
    #[must_use]
    pub fn render_document(&self, view: &PageView) -> String {
        let page = self.render(view);
        let head = el("head")
            .child(el("meta").attr("charset", "utf-8"))
            .child(
                el("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(el("title").text(PAGE_TITLE))
            .child(el("style").child(Node::raw(self.stylesheet.clone())));
        let html = el("html")
            .attr("lang", "en")
            .child(head)
            .child(el("body").child(page.root));
        format!("<!DOCTYPE html>{}", html.to_html())
    }
}

// ---------------------------------------------------------------------------
// Reveal pass
// ---------------------------------------------------------------------------

struct RevealPass<'a> {
    renderer: &'a StaticContentRenderer,
    view: &'a PageView,
    next_id: u32,
    slots: Vec<RevealSlot>,
}

impl RevealPass<'_> {
    fn visit(&mut self, element: &mut Element, section: Option<Section>) {
        let section = element
            .get_attr("id")
            .and_then(Section::from_anchor)
            .or(section);
        let mut position = 0u32;
        for child in element.child_nodes_mut() {
            let Node::Element(child) = child else {
                continue;
            };
            position += 1;
            if child.has_class(REVEAL_CLASS) {
                self.decorate(child, position, section);
            }
            self.visit(child, section);
        }
    }

    fn decorate(&mut self, element: &mut Element, sibling_index: u32, section: Option<Section>) {
        let id = ElementId(self.next_id);
        self.next_id += 1;

        let (phase, delay) = match self.view.reveal.element(id) {
            Some(view) => (view.phase, view.delay),
            None => (
                RevealPhase::Hidden,
                self.renderer.stagger.delay_for(sibling_index),
            ),
        };
        let style = reveal_style(
            phase,
            delay,
            self.view.reveal.degraded,
            &self.renderer.config,
        );
        element.set_attr("data-reveal-id", id.to_string());
        element.set_attr("style", style.to_css());
        if phase.is_revealed() {
            element.add_class(REVEALED_CLASS);
        }
        self.slots.push(RevealSlot {
            id,
            sibling_index,
            section,
        });
    }
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

fn icon(kind: IconKind) -> Element {
    el("span")
        .class(format!("icon icon-{}", kind.name()))
        .attr("aria-hidden", "true")
}

fn gradient_text(text: &str, gradient: Gradient) -> Element {
    el("span")
        .class("gradient-text")
        .attr(
            "style",
            StyleDecl::new()
                .with("background-image", gradient.css())
                .to_css(),
        )
        .text(text)
}

fn heading(text: &str, gradient: Gradient) -> Element {
    el("h2")
        .class(format!("section-title {REVEAL_CLASS}"))
        .child(gradient_text(text, gradient))
}

/// Anchor that opens in a new tab.
fn external_link(href: &str) -> Element {
    el("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr("data-click", ClickTarget::External(href.to_owned()).data_key())
}

fn social_anchor(link: &SocialLink) -> Element {
    if link.is_external() {
        external_link(link.href)
    } else {
        el("a").attr("href", link.href)
    }
}

/// `transition-delay` for the `index`th hover item.
fn hover_delay(index: u64, step_ms: u64) -> String {
    StyleDecl::new()
        .with(
            "transition-delay",
            css_seconds(Duration::from_millis(index * step_ms)),
        )
        .to_css()
}

fn cursor_follower(snapshot: &RevealSnapshot) -> Element {
    let style = match &snapshot.follower {
        Some(follower) => style::follower_style(follower),
        None => StyleDecl::new().with("display", "none"),
    };
    el("div")
        .class("cursor-follower")
        .attr("data-follower", "")
        .attr("style", style.to_css())
}

fn backdrop(snapshot: &RevealSnapshot) -> Element {
    let layers = snapshot
        .parallax
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            el("div")
                .class(format!(
                    "parallax-layer parallax-layer-{}",
                    i % PARALLAX_PRESETS
                ))
                .attr("data-parallax-layer", i.to_string())
                .attr("style", style::parallax_style(*offset).to_css())
        });
    el("div")
        .class("backdrop")
        .attr("aria-hidden", "true")
        .child(el("div").class("backdrop-grid"))
        .children(layers)
}

fn navigation(menu_open: bool) -> Element {
    let desktop_links = Section::NAV_ORDER.map(|section| {
        el("a")
            .attr("href", section.href())
            .text(section.label())
    });
    let mobile_links = Section::NAV_ORDER.map(|section| {
        el("a")
            .attr("href", section.href())
            .attr("data-click", ClickTarget::NavLink(section).data_key())
            .text(section.label())
    });
    let toggle_icon = if menu_open {
        IconKind::Close
    } else {
        IconKind::Menu
    };

    el("nav")
        .class("site-nav")
        .child(
            el("div")
                .class("container nav-bar")
                .child(
                    el("div")
                        .class("brand")
                        .child(gradient_text(PROFILE.name, Gradient::PURPLE_PINK).class(
                            "gradient-text animate-gradient",
                        )),
                )
                .child(el("div").class("nav-links").children(desktop_links))
                .child(
                    el("button")
                        .class("menu-button")
                        .attr("type", "button")
                        .attr("data-click", ClickTarget::MenuButton.data_key())
                        .attr("aria-controls", "mobile-menu")
                        .attr("aria-expanded", menu_open.to_string())
                        .attr("aria-label", "Toggle navigation")
                        .child(icon(toggle_icon)),
                ),
        )
        .child(
            el("div")
                .class("mobile-menu")
                .attr("id", "mobile-menu")
                .attr("data-menu", "")
                .attr("style", style::menu_panel_style(menu_open).to_css())
                .child(el("div").class("container").children(mobile_links)),
        )
}

fn section(section: Section) -> Element {
    match section {
        Section::Home => hero(),
        Section::About => about(),
        Section::Skills => skills(),
        Section::Projects => projects(),
        Section::Contact => contact(),
    }
}

fn hero() -> Element {
    let badges = PROFILE.badges.iter().map(|badge| {
        el("span")
            .class("badge")
            .attr(
                "style",
                StyleDecl::new()
                    .with("background-image", badge.theme.css())
                    .to_css(),
            )
            .text(badge.text)
    });
    let social = PROFILE.social.iter().map(|link| {
        social_anchor(link)
            .class("social-link")
            .attr("aria-label", link.label)
            .child(icon(link.icon))
    });

    el("section").attr("id", Section::Home.anchor()).class("hero").child(
        el("div")
            .class("container")
            .child(
                el("div")
                    .class("hero-float")
                    .child(el("div").class("greeting").text(PROFILE.greeting))
                    .child(el("h1").child(
                        gradient_text(PROFILE.name, Gradient::PURPLE_PINK)
                            .class("gradient-text animate-gradient"),
                    ))
                    .child(el("div").class("headline").text(PROFILE.headline)),
            )
            .child(
                el("p")
                    .class("tagline")
                    .text(format!("{} ", PROFILE.role))
                    .child(el("span").class("highlight").text(PROFILE.institution))
                    .text(format!(" | {}", PROFILE.tagline)),
            )
            .child(el("div").class("badges").children(badges))
            .child(
                el("div")
                    .class("cta")
                    .child(
                        el("button")
                            .class("button-primary")
                            .attr("type", "button")
                            .attr("data-click", ClickTarget::ExploreWork.data_key())
                            .text("Explore My Work")
                            .child(icon(IconKind::ArrowRight)),
                    )
                    .child(
                        external_link(PROFILE.featured_demo)
                            .class("button-outline")
                            .text("Live Project Demo")
                            .child(icon(IconKind::ExternalLink)),
                    ),
            )
            .child(el("div").class("social").children(social)),
    )
}

fn about() -> Element {
    let edu = &PROFILE.education;
    let education = el("div")
        .class(format!("card {REVEAL_CLASS}"))
        .child(icon(IconKind::Book))
        .child(el("h3").text("Education"))
        .child(
            el("div")
                .child(el("div").class("degree").text(edu.degree))
                .child(el("div").class("highlight").text(edu.institution))
                .child(el("div").class("muted").text(edu.graduation))
                .child(
                    el("div")
                        .child(el("span").class("grade").text(edu.grade))
                        .text(format!(" {}", edu.grade_note)),
                ),
        );
    let achievements = el("div")
        .class(format!("card {REVEAL_CLASS}"))
        .child(icon(IconKind::Award))
        .child(el("h3").text("Key Achievements"))
        .child(el("div").children((0u64..).zip(ACHIEVEMENTS).map(|(i, text)| {
            el("div")
                .class("hover-item")
                .attr("style", hover_delay(i, 100))
                .child(el("span").text(text))
        })));

    el("section").attr("id", Section::About.anchor()).child(
        el("div")
            .class("container")
            .child(heading("About Me", Gradient::BLUE_CYAN))
            .child(
                el("p")
                    .class(format!("lead {REVEAL_CLASS}"))
                    .text(PROFILE.about),
            )
            .child(
                el("div")
                    .class("grid grid-2")
                    .child(education)
                    .child(achievements),
            ),
    )
}

fn skill_card(skill: &Skill) -> Element {
    let gradient = StyleDecl::new()
        .with("background-image", skill.theme.css())
        .to_css();
    let items = (0u64..).zip(skill.items).map(|(j, item)| {
        el("div")
            .class("hover-item")
            .attr("style", hover_delay(j, 100))
            .child(el("span").class("swatch").attr("style", gradient.clone()))
            .text(*item)
    });
    el("div")
        .class(format!("card skill-card {REVEAL_CLASS}"))
        .child(
            el("div")
                .class("skill-icon")
                .attr("style", gradient.clone())
                .child(icon(skill.icon)),
        )
        .child(el("h3").text(skill.name))
        .child(el("div").class("skill-items").children(items))
}

fn skills() -> Element {
    let tags = (0u64..).zip(ADDITIONAL_TECH).map(|(i, tech)| {
        el("span")
            .class("tag")
            .attr("style", hover_delay(i, 50))
            .text(tech)
    });
    el("section")
        .attr("id", Section::Skills.anchor())
        .class("alt-bg")
        .child(
            el("div")
                .class("container")
                .child(heading("Technical Arsenal", Gradient::ORANGE_RED))
                .child(
                    el("div")
                        .class("grid grid-3")
                        .children(SKILLS.iter().map(skill_card)),
                )
                .child(
                    el("div")
                        .class(format!("card additional-tech {REVEAL_CLASS}"))
                        .child(el("h3").text("Additional Technologies"))
                        .child(el("div").class("tags").children(tags)),
                ),
        )
}

fn project_card(project: &Project) -> Element {
    let mut header = el("div")
        .class("project-header")
        .child(el("h3").text(project.title));
    if let Some(link) = project.link {
        header = header.child(
            external_link(link)
                .class("project-link")
                .attr(
                    "style",
                    StyleDecl::new()
                        .with("background-image", project.theme.css())
                        .to_css(),
                )
                .text("Live Demo")
                .child(icon(IconKind::ExternalLink)),
        );
    }

    let mut body = el("div").class("project-body").child(header);
    if let Some(achievement) = project.achievement {
        body = body.child(el("div").class("project-achievement").text(achievement));
    }
    let tags = (0u64..).zip(project.tech).map(|(j, tech)| {
        el("span")
            .class("tag")
            .attr("style", hover_delay(j, 50))
            .text(*tech)
    });
    body = body
        .child(el("p").class("project-description").text(project.description))
        .child(el("div").class("tags").children(tags));

    el("div")
        .class(format!("card project-card {REVEAL_CLASS}"))
        .child(body)
}

fn projects() -> Element {
    el("section").attr("id", Section::Projects.anchor()).child(
        el("div")
            .class("container")
            .child(heading("Featured Projects", Gradient::PURPLE_PINK))
            .child(
                el("div")
                    .class("project-list")
                    .children(PROJECTS.iter().map(project_card)),
            ),
    )
}

fn contact() -> Element {
    let mut pitch = el("p")
        .class(format!("lead {REVEAL_CLASS}"))
        .text(format!("{} ", PROFILE.contact_lead));
    let last = PROFILE.interests.len().saturating_sub(1);
    for (i, interest) in PROFILE.interests.iter().enumerate() {
        if i > 0 {
            pitch = pitch.text(if i == last { ", and " } else { ", " });
        }
        pitch = pitch.child(el("span").class("highlight").text(*interest));
    }
    pitch = pitch.text(".");

    el("section")
        .attr("id", Section::Contact.anchor())
        .class("alt-bg")
        .child(
            el("div")
                .class("container")
                .child(heading("Let's Build Something Amazing", Gradient::GREEN_TEAL))
                .child(pitch)
                .child(
                    el("div")
                        .class(format!("cta {REVEAL_CLASS}"))
                        .child(
                            el("a")
                                .class("button-primary")
                                .attr("href", PROFILE.mailto())
                                .child(icon(IconKind::Mail))
                                .text("Email Me"),
                        )
                        .child(
                            el("a")
                                .class("button-outline")
                                .attr("href", PROFILE.phone_href)
                                .text(PROFILE.phone_display),
                        ),
                )
                .child(
                    el("div")
                        .class(format!("location {REVEAL_CLASS}"))
                        .child(el("p").text(PROFILE.location))
                        .child(el("p").text(PROFILE.availability)),
                ),
        )
}

fn footer() -> Element {
    let links = PROFILE
        .social
        .iter()
        .map(|link| social_anchor(link).class("footer-link").text(link.label));
    el("footer").child(
        el("div")
            .class("container footer-row")
            .child(el("div").class("copyright").text(PROFILE.copyright))
            .child(el("div").class("footer-links").children(links)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::capabilities::ViewportCapabilities;
    use folio_core::geometry::Size;
    use folio_runtime::ViewportRevealController;

    fn initial_view() -> PageView {
        let controller = ViewportRevealController::new(
            RevealConfig::default(),
            ViewportCapabilities::modern(),
            Size::new(1280.0, 800.0),
        );
        PageView::new(controller.snapshot(), false)
    }

    #[test]
    fn hover_delay_steps() {
        assert_eq!(hover_delay(0, 100), "transition-delay: 0s");
        assert_eq!(hover_delay(3, 50), "transition-delay: 0.15s");
    }

    #[test]
    fn interests_are_joined_with_oxford_comma() {
        let text = contact().text_content();
        assert!(text.contains(
            "in Full-Stack Development, Machine Learning, and Software Development."
        ));
    }

    #[test]
    fn reveal_ids_are_sequential() {
        let page = StaticContentRenderer::default().render(&initial_view());
        let ids: Vec<u32> = page.revealables.iter().map(|s| s.id.get()).collect();
        let expected: Vec<u32> = (1..=ids.len() as u32).collect();
        assert_eq!(ids, expected);
    }
}
