use super::{attr, element_text, parse_selector, trimmed_text};
use crate::domain::{GameDetail, NO_DOWNLOAD_LINK, NO_GENERAL_NOTE};
use crate::error::Result;
use scraper::{ElementRef, Html, Selector};

const GENERAL_NOTE_MARKER: &str = "Make sure you have Spacewar installed";
const SYSTEM_REQUIREMENTS_HEADING: &str = "System Requirements";
const HOW_TO_INSTALL_HEADING: &str = "How To Install The Game";
const HOW_TO_PLAY_ONLINE_HEADING: &str = "How To Play OnLine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Image,
    ReleaseDate,
    Developer,
    Publisher,
    Genre,
    Reviews,
    Description,
    GeneralNote,
    HowToInstall,
    HowToPlayOnline,
    Trailer,
    DownloadLink,
}

enum Rule {
    /// Text of every match, joined and trimmed.
    Text(Selector),
    /// Attribute of the first match.
    Attr(Selector, &'static str),
    /// Every paragraph containing the label, joined, with the first
    /// `LABEL:` stripped.
    Labeled(&'static str),
    /// Every paragraph containing the marker, concatenated.
    ParagraphsContaining(&'static str),
    /// Paragraphs directly following the heading, space-joined.
    Section(&'static str),
}

struct FieldRule {
    field: Field,
    rule: Rule,
    fallback: &'static str,
}

impl FieldRule {
    fn new(field: Field, rule: Rule, fallback: &'static str) -> Self {
        Self {
            field,
            rule,
            fallback,
        }
    }
}

/// Parses a single game page. Every field is looked up on its own and falls
/// back independently, so a page missing half its markup still produces a
/// complete record.
pub struct DetailScraper {
    rules: Vec<FieldRule>,
    paragraph: Selector,
    heading: Selector,
    list_item: Selector,
    screenshot: Selector,
}

impl DetailScraper {
    pub fn new() -> Result<Self> {
        let rules = vec![
            FieldRule::new(Field::Title, Rule::Text(parse_selector("h1.entry-title")?), ""),
            FieldRule::new(
                Field::Image,
                Rule::Attr(parse_selector(".entry-content img")?, "src"),
                "",
            ),
            FieldRule::new(Field::ReleaseDate, Rule::Labeled("RELEASE DATE"), ""),
            FieldRule::new(Field::Developer, Rule::Labeled("DEVELOPER"), ""),
            FieldRule::new(Field::Publisher, Rule::Labeled("PUBLISHER"), ""),
            FieldRule::new(Field::Genre, Rule::Labeled("GENRE"), ""),
            FieldRule::new(Field::Reviews, Rule::Labeled("ALL REVIEWS"), ""),
            FieldRule::new(
                Field::Description,
                Rule::Text(parse_selector(".game_description_snippet")?),
                "",
            ),
            FieldRule::new(
                Field::GeneralNote,
                Rule::ParagraphsContaining(GENERAL_NOTE_MARKER),
                NO_GENERAL_NOTE,
            ),
            FieldRule::new(
                Field::HowToInstall,
                Rule::Section(HOW_TO_INSTALL_HEADING),
                "",
            ),
            FieldRule::new(
                Field::HowToPlayOnline,
                Rule::Section(HOW_TO_PLAY_ONLINE_HEADING),
                "",
            ),
            FieldRule::new(
                Field::Trailer,
                Rule::Attr(parse_selector("video source")?, "src"),
                "",
            ),
            FieldRule::new(
                Field::DownloadLink,
                Rule::Attr(parse_selector("a.direct")?, "href"),
                NO_DOWNLOAD_LINK,
            ),
        ];

        Ok(Self {
            rules,
            paragraph: parse_selector("p")?,
            heading: parse_selector("h3")?,
            list_item: parse_selector("li")?,
            screenshot: parse_selector(".slideshow-container .mySlides img")?,
        })
    }

    pub fn extract_detail(&self, html: &str) -> GameDetail {
        let document = Html::parse_document(html);
        let mut detail = GameDetail::default();

        for rule in &self.rules {
            let value = self
                .apply(&document, &rule.rule)
                .unwrap_or_else(|| rule.fallback.to_string());
            *field_mut(&mut detail, rule.field) = value;
        }

        detail.system_requirements = self.system_requirements(&document);
        detail.screenshots = self.screenshots(&document);
        detail
    }

    fn apply(&self, document: &Html, rule: &Rule) -> Option<String> {
        match rule {
            Rule::Text(selector) => {
                joined_text(document.select(selector)).map(|text| text.trim().to_string())
            }
            Rule::Attr(selector, name) => document
                .select(selector)
                .next()
                .and_then(|element| attr(element, name)),
            Rule::Labeled(label) => self.labeled(document, label),
            Rule::ParagraphsContaining(marker) => {
                let text = document
                    .select(&self.paragraph)
                    .map(element_text)
                    .filter(|text| text.contains(marker))
                    .collect::<String>();
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            Rule::Section(heading) => Some(self.section(document, heading)),
        }
    }

    fn labeled(&self, document: &Html, label: &str) -> Option<String> {
        let text = joined_text(
            document
                .select(&self.paragraph)
                .filter(|p| element_text(*p).contains(label)),
        )?;

        Some(text.replacen(&format!("{label}:"), "", 1).trim().to_string())
    }

    fn headings<'a>(
        &'a self,
        document: &'a Html,
        heading: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        document
            .select(&self.heading)
            .filter(move |h| element_text(*h).contains(heading))
    }

    fn section(&self, document: &Html, heading: &str) -> String {
        let mut text = String::new();

        for h in self.headings(document, heading) {
            for paragraph in following_elements(h).take_while(|el| el.value().name() == "p") {
                text.push_str(&trimmed_text(paragraph));
                text.push(' ');
            }
        }

        text
    }

    fn system_requirements(&self, document: &Html) -> Vec<String> {
        self.headings(document, SYSTEM_REQUIREMENTS_HEADING)
            .filter_map(|h| following_elements(h).next())
            .filter(|next| next.value().name() == "ul")
            .flat_map(|list| list.select(&self.list_item).map(trimmed_text))
            .collect()
    }

    fn screenshots(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.screenshot)
            .filter_map(|img| attr(img, "src"))
            .collect()
    }
}

/// `None` when nothing matched, so the rule's fallback applies.
fn joined_text<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> Option<String> {
    let mut elements = elements.peekable();
    elements.peek()?;
    Some(elements.map(element_text).collect())
}

fn following_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.next_siblings().filter_map(ElementRef::wrap)
}

fn field_mut(detail: &mut GameDetail, field: Field) -> &mut String {
    match field {
        Field::Title => &mut detail.title,
        Field::Image => &mut detail.image,
        Field::ReleaseDate => &mut detail.release_date,
        Field::Developer => &mut detail.developer,
        Field::Publisher => &mut detail.publisher,
        Field::Genre => &mut detail.genre,
        Field::Reviews => &mut detail.reviews,
        Field::Description => &mut detail.description,
        Field::GeneralNote => &mut detail.general_note,
        Field::HowToInstall => &mut detail.how_to_install,
        Field::HowToPlayOnline => &mut detail.how_to_play_online,
        Field::Trailer => &mut detail.trailer,
        Field::DownloadLink => &mut detail.download_link,
    }
}
