//! Static content feed — the chronicle itself.
//!
//! Everything here is data, not logic: the ordered section list (which the
//! activity resolver depends on matching real top-to-bottom layout order),
//! the nav items, the five timeline events, the card grids, and the
//! cultural-analysis topics.  Supplied once at startup and never mutated.

use super::carousel::CarouselEntry;
use super::geometry::SectionId;

// ───────────────────────────────────────── sections ──────────

/// The section the Home control returns to.
pub const HOME_SECTION: SectionId = "hero";

/// Destination of the hero scroll chevron.
pub const HERO_CHEVRON_TARGET: SectionId = "intro-text";

/// What a section renders as.
#[derive(Debug, Clone, Copy)]
pub enum SectionBody {
    /// Full-viewport opener with oversized title and a scroll hint.
    Hero {
        title_lines: &'static [&'static str],
        hint: &'static str,
    },
    /// Centred quote plus supporting paragraphs.
    Prose {
        lede: &'static str,
        paragraphs: &'static [&'static str],
    },
    /// The timeline carousel hub.
    Timeline,
    /// A grid of bento cards.
    Cards(&'static [CardContent]),
    /// The tabbed cultural-analysis card.
    Analysis,
}

/// One top-level section of the document.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub body: SectionBody,
}

// ───────────────────────────────────────── cards ─────────────

/// Background treatment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardArt {
    /// Flat panel.
    Plain,
    /// Near-black panel.
    Dark,
    /// Textured placeholder band keyed into the asset table.
    Image(&'static str),
}

/// Column span within the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSpan {
    Half,
    Full,
}

/// One bento card: optional header, art treatment, body paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct CardContent {
    pub title: Option<&'static str>,
    /// Single-glyph icon shown before the title.
    pub icon: Option<&'static str>,
    pub art: CardArt,
    pub span: CardSpan,
    pub paragraphs: &'static [&'static str],
}

// ───────────────────────────────────────── nav ───────────────

/// One navigation control.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
}

/// Chronologically ordered nav controls (Home is separate).
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "timeline-section", label: "Zeitstrahl" },
    NavItem { id: "intro", label: "1299" },
    NavItem { id: "rise", label: "1453" },
    NavItem { id: "culture", label: "Kultur" },
    NavItem { id: "vienna", label: "1683" },
    NavItem { id: "fall", label: "Der Fall" },
];

// ───────────────────────────────────────── timeline ──────────

pub static TIMELINE_EVENTS: &[CarouselEntry] = &[
    CarouselEntry {
        year: "1299",
        title: "Der Anfang",
        description: "Osman I. gründet das Reich. Von Bithynien aus beginnt der Aufstieg zu einer Weltmacht.",
        image_key: "timeline_1299",
        destination: "intro",
    },
    CarouselEntry {
        year: "1453",
        title: "Konstantinopel",
        description: "Die Eroberung der byzantinischen Hauptstadt durch Mehmed II. Der Beginn einer neuen Ära.",
        image_key: "timeline_1453",
        destination: "rise",
    },
    CarouselEntry {
        year: "1520",
        title: "Die Blütezeit",
        description: "Unter Süleyman dem Prächtigen erreicht das Reich seinen kulturellen und politischen Höhepunkt.",
        image_key: "timeline_1520",
        destination: "culture",
    },
    CarouselEntry {
        year: "1683",
        title: "Wien",
        description: "Die gescheiterte zweite Belagerung Wiens markiert den Wendepunkt und den Beginn des Rückzugs.",
        image_key: "timeline_1683",
        destination: "vienna",
    },
    CarouselEntry {
        year: "1914",
        title: "Der Fall",
        description: "Der Erste Weltkrieg, die Jungtürken und der endgültige Zerfall des Reiches.",
        image_key: "timeline_1914",
        destination: "fall",
    },
];

// ───────────────────────────────────────── analysis ──────────

/// One tab of the cultural-analysis card.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisTopic {
    /// Segmented-control label.
    pub label: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub static ANALYSIS_TOPICS: &[AnalysisTopic] = &[
    AnalysisTopic {
        label: "Selbstwahrnehmung",
        title: "Das Millet-System",
        paragraphs: &[
            "Von sich selber hielten die Osmanen recht viel. Sie standen an der Spitze ihres selbst aufgebauten Millet-Systems.",
            "In diesem System durften zwar alle Religionen miteinander leben, doch gab es keine Gleichberechtigung. Alle Untergeordneten (Nicht-Muslime) mussten eine Kopfsteuer an den Staat zahlen.",
            "Die Osmanen waren grundsätzlich migrationsfreundlich, solange die Zugezogenen zum Wachstum beisteuern konnten. Anfang des 20. Jahrhunderts lag der Anteil der Zugezogenen bei knapp 30%.",
        ],
    },
    AnalysisTopic {
        label: "Fremdwahrnehmung",
        title: "Der Türkische Scharfrichter",
        paragraphs: &[
            "Andere europäische Länder verurteilten die harten Vorgehensweisen der Osmanen bei Niederschlagungen von Aufständen. Man berichtete propagandistisch vom \"Le bourreau turc\" (der türkische Scharfrichter).",
            "Teile der slawischen Bevölkerung lehnten sich gegen die Vorherrschaft und die Steuerlast auf. Das Bild des Osmanischen Reiches wandelte sich in Europa vom faszinierenden Exotismus zum \"Kranken Mann am Bosporus\".",
        ],
    },
    AnalysisTopic {
        label: "Bündnisse",
        title: "Eisenbahn & Bündnisse",
        paragraphs: &[
            "Die Türken erkannten, dass sie technologisch nicht mehr mit England und Frankreich mithalten konnten. Es wurde eine Bank gegründet und der legendäre Zug, der Istanbul mit Paris verband.",
            "Nachdem Frankreich (Algerien, Tunesien) und England (Ägypten) osmanische Gebiete übernahmen, suchten die Osmanen neue Verbündete: Deutschland.",
            "Kaiser Wilhelm II. und Abdülhamid II. planten die Bagdad-Bahn, um Waren von Berlin bis Bagdad auszutauschen.",
        ],
    },
];

// ───────────────────────────────────────── card grids ────────

static INTRO_CARDS: &[CardContent] = &[
    CardContent {
        title: Some("Osman I."),
        icon: Some("♛"),
        art: CardArt::Image("osman"),
        span: CardSpan::Half,
        paragraphs: &[
            "Der Begründer des Osmanischen Reiches hieß Osman I. Er wurde 1258 in der heutigen Türkei geboren und war der Sohn eines Hordenfürsten.",
            "Er gründete sein Reich Anfang des 14. Jahrhunderts (ca. 1299). Aufgrund guter Freundschaften zu Nachbarstämmen konnte er sich deren Unterstützung bei seinen Eroberungen sichern.",
        ],
    },
    CardContent {
        title: Some("Expansion"),
        icon: Some("⚑"),
        art: CardArt::Dark,
        span: CardSpan::Half,
        paragraphs: &[
            "Die ersten großen Städte wurden erst von seinen Nachfolgern eingenommen. Bursa beispielsweise war ein wichtiger Knotenpunkt an der Seidenstraße und fiel 1326, kurz vor Osmans Tod.",
        ],
    },
    CardContent {
        title: None,
        icon: None,
        art: CardArt::Image("bursa"),
        span: CardSpan::Full,
        paragraphs: &[],
    },
];

static RISE_CARDS: &[CardContent] = &[
    CardContent {
        title: Some("Die Kanonen"),
        icon: None,
        art: CardArt::Image("cannon"),
        span: CardSpan::Half,
        paragraphs: &[
            "Eine eigens gebaute, acht Meter lange Kanone (\"Dardanellen-Geschütz\") konnte massive Steinkugeln verschießen und richtete verheerende Schäden an den theodosianischen Mauern an.",
        ],
    },
    CardContent {
        title: Some("Strategie"),
        icon: Some("⚔"),
        art: CardArt::Dark,
        span: CardSpan::Half,
        paragraphs: &[
            "Mehmed II. bestieg 1451 den Thron. Sein Ziel war die uneinnehmbare Stadt. Da die Kette am Goldenen Horn den Seeweg versperrte, musste er improvisieren.",
        ],
    },
    CardContent {
        title: Some("Schiffe über Land"),
        icon: Some("⛵"),
        art: CardArt::Image("ships"),
        span: CardSpan::Full,
        paragraphs: &[
            "Da die Osmanen nicht in den Hafen gelangten, trugen sie ihre Boote über geölte Holzbohlen über einen Hügel hinter die feindlichen Linien.",
            "Dieser Überraschungsangriff von innen besiegelte das Ende des Byzantinischen Reiches und wird oft als Übergang vom Mittelalter zur Neuzeit gesehen.",
        ],
    },
    CardContent {
        title: Some("Hagia Sophia"),
        icon: None,
        art: CardArt::Image("hagia_sophia"),
        span: CardSpan::Full,
        paragraphs: &[
            "Konstantinopel wurde zur neuen Hauptstadt. Die Hagia Sophia wurde in eine Moschee (Aya-Sofya) umgewandelt, doch die christliche Bevölkerung durfte unter dem Millet-System bleiben.",
        ],
    },
];

static VIENNA_CARDS: &[CardContent] = &[
    CardContent {
        title: Some("Der Goldene Apfel"),
        icon: Some("⛨"),
        art: CardArt::Dark,
        span: CardSpan::Half,
        paragraphs: &[
            "Wien war als \"Goldener Apfel\" bekannt. Großwesir Kara Mustafa Pascha startete den Angriff, da der Friedensvertrag mit Leopold I. abgelaufen war.",
        ],
    },
    CardContent {
        title: Some("Die Verteidigung"),
        icon: None,
        art: CardArt::Image("vienna_wall"),
        span: CardSpan::Half,
        paragraphs: &[
            "Dank der nach dem Dreißigjährigen Krieg modernisierten Stadtmauern hielt Wien stand.",
        ],
    },
    CardContent {
        title: Some("Krieg im Untergrund"),
        icon: Some("⛏"),
        art: CardArt::Image("vienna_tunnels"),
        span: CardSpan::Half,
        paragraphs: &[
            "Die Osmanen gruben Tunnel, um die Mauern zu sprengen.",
            "Die Wiener orteten die Gräber durch Erschütterungen (Erbsen auf Trommeln) und bekämpften sie in engen Stollen unter der Erde.",
        ],
    },
    CardContent {
        title: Some("Die Heilige Liga"),
        icon: Some("✦"),
        art: CardArt::Dark,
        span: CardSpan::Half,
        paragraphs: &[
            "Ein Bündnis zwischen Kaiser Leopold I. und dem polnischen König Jan Sobieski rettete die Stadt.",
        ],
    },
    CardContent {
        title: Some("Schlacht am Kahlenberg"),
        icon: None,
        art: CardArt::Image("vienna_treaty"),
        span: CardSpan::Full,
        paragraphs: &[
            "12. September 1683 — Die polnischen Flügelreiter (Hussaren) entschieden die Schlacht. Der Großwesir entkam knapp.",
            "Die Folgen: Verlust großer Gebiete in Ungarn, Beginn des osmanischen Rückzugs aus Europa, Frieden von Karlowitz (1699).",
        ],
    },
];

static FALL_CARDS: &[CardContent] = &[
    CardContent {
        title: Some("Der Erste Weltkrieg"),
        icon: Some("⚠"),
        art: CardArt::Image("fall_bg"),
        span: CardSpan::Half,
        paragraphs: &[
            "Nach Reformversuchen der \"Jungtürken\" trat das Reich an der Seite Deutschlands in den Krieg ein (Waffenbrüderschaft).",
            "Trotz des Aufrufs zum Dschihad blieben Erfolge aus. 1918 endete der Krieg mit einer Niederlage.",
        ],
    },
    CardContent {
        title: Some("Die Republik"),
        icon: None,
        art: CardArt::Image("ataturk"),
        span: CardSpan::Half,
        paragraphs: &[
            "Mustafa Kemal Atatürk verhinderte die komplette Aufteilung des Reiches durch die Siegermächte und rief 1923 die moderne Republik Türkei aus. Das Sultanat wurde abgeschafft.",
        ],
    },
];

// ───────────────────────────────────────── document ──────────

/// The whole document, top to bottom.  Order here *is* layout order.
pub static SECTIONS: &[Section] = &[
    Section {
        id: "hero",
        title: "Osmanisches Reich",
        subtitle: None,
        body: SectionBody::Hero {
            title_lines: &["OSMANISCHES", "REICH"],
            hint: "▼  scrollen",
        },
    },
    Section {
        id: "intro-text",
        title: "",
        subtitle: None,
        body: SectionBody::Prose {
            lede: "\"Zu seiner Hochzeit war das Osmanische Reich, welches von 1299–1922 andauerte, ein Weltreich, das vor allem im Balkan Macht ausübte.\"",
            paragraphs: &[
                "Im Laufe der Jahrhunderte vergrößerte es seinen Einflussbereich. Viele Sultane haben das Osmanische Reich regiert, doch wo fand es seinen Anfang und wie kam es dazu, dass es heute nicht mehr existiert?",
            ],
        },
    },
    Section {
        id: "timeline-section",
        title: "Der Verlauf der Geschichte",
        subtitle: Some("Chronologie"),
        body: SectionBody::Timeline,
    },
    Section {
        id: "intro",
        title: "1299 - 1453",
        subtitle: Some("Der Ursprung"),
        body: SectionBody::Cards(INTRO_CARDS),
    },
    Section {
        id: "rise",
        title: "1453",
        subtitle: Some("Die Eroberung"),
        body: SectionBody::Cards(RISE_CARDS),
    },
    Section {
        id: "culture",
        title: "Kultur & Wahrnehmung",
        subtitle: Some("Begegnung"),
        body: SectionBody::Analysis,
    },
    Section {
        id: "vienna",
        title: "1683",
        subtitle: Some("Die Belagerung"),
        body: SectionBody::Cards(VIENNA_CARDS),
    },
    Section {
        id: "fall",
        title: "Der Fall",
        subtitle: Some("1914 - 1923"),
        body: SectionBody::Cards(FALL_CARDS),
    },
];

/// Section ids in layout order, for the activity resolver.
pub fn section_ids() -> impl Iterator<Item = SectionId> {
    SECTIONS.iter().map(|s| s.id)
}

/// Look up a section by id.
pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Total number of bento cards across all sections (one reveal gate each).
pub fn card_count() -> usize {
    SECTIONS
        .iter()
        .map(|s| match s.body {
            SectionBody::Cards(cards) => cards.len(),
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_and_ordered() {
        let ids: Vec<_> = section_ids().collect();
        assert_eq!(
            ids,
            vec![
                "hero",
                "intro-text",
                "timeline-section",
                "intro",
                "rise",
                "culture",
                "vienna",
                "fall"
            ]
        );
    }

    #[test]
    fn nav_targets_exist() {
        for item in NAV_ITEMS {
            assert!(section(item.id).is_some(), "nav target {} missing", item.id);
        }
        assert!(section(HOME_SECTION).is_some());
        assert!(section(HERO_CHEVRON_TARGET).is_some());
    }

    #[test]
    fn timeline_destinations_exist() {
        for event in TIMELINE_EVENTS {
            assert!(
                section(event.destination).is_some(),
                "timeline destination {} missing",
                event.destination
            );
        }
    }

    #[test]
    fn card_count_matches_grids() {
        assert_eq!(card_count(), 3 + 4 + 5 + 2);
    }
}
