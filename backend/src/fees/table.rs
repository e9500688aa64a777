//! Static per-state fee template table
//!
//! Typical third-party closing cost ranges by state. States not listed here
//! use the fallback template (Ohio by default), which sits near the national
//! middle for every category.

use tracing::debug;

use super::range::FeeTemplate;

/// Region whose template is used for any state without its own entry
pub const DEFAULT_TEMPLATE_REGION: &str = "OH";

/// Ohio ranges, also the last-resort fallback template
#[rustfmt::skip]
const OHIO: FeeTemplate = FeeTemplate::new((320, 430), (400, 530), (300, 430), (110, 170), (500, 750), (0.0045, 0.0065), (120, 190), (38, 55), (18, 30));

/// Fee ranges by state
///
/// Column order: inspection, appraisal, survey, pest, lawyer, title (rate),
/// recording, credit report, flood determination.
#[rustfmt::skip]
pub static STATE_FEE_TEMPLATES: &[(&str, FeeTemplate)] = &[
    // Northeast
    ("MA", FeeTemplate::new((450, 600), (500, 700), (400, 600), (150, 250), (800, 1200), (0.006, 0.008), (150, 250), (40, 60), (20, 35))),
    ("CT", FeeTemplate::new((450, 600), (500, 700), (400, 600), (150, 250), (800, 1200), (0.006, 0.008), (150, 250), (40, 60), (20, 35))),
    ("RI", FeeTemplate::new((400, 550), (480, 650), (380, 550), (140, 220), (750, 1100), (0.0055, 0.0075), (130, 220), (38, 55), (18, 32))),
    ("ME", FeeTemplate::new((350, 500), (420, 580), (300, 450), (100, 180), (600, 950), (0.005, 0.007), (110, 180), (35, 50), (15, 28))),
    ("NH", FeeTemplate::new((380, 520), (450, 620), (350, 520), (120, 200), (700, 1050), (0.0055, 0.0075), (130, 200), (38, 55), (18, 30))),
    ("VT", FeeTemplate::new((350, 480), (420, 570), (320, 480), (110, 180), (650, 950), (0.005, 0.007), (115, 180), (35, 50), (15, 28))),
    ("NY", FeeTemplate::new((550, 700), (650, 850), (600, 850), (150, 250), (1000, 1400), (0.006, 0.008), (200, 350), (50, 75), (25, 45))),
    ("NJ", FeeTemplate::new((450, 600), (520, 700), (450, 650), (140, 220), (850, 1250), (0.0055, 0.0075), (180, 280), (45, 65), (22, 40))),
    ("PA", FeeTemplate::new((380, 500), (450, 600), (350, 500), (120, 180), (600, 900), (0.005, 0.0075), (130, 200), (40, 58), (20, 32))),
    // Mid-Atlantic
    ("MD", FeeTemplate::new((400, 550), (480, 650), (380, 550), (130, 200), (650, 950), (0.0055, 0.0075), (140, 220), (40, 58), (20, 32))),
    ("DC", FeeTemplate::new((500, 700), (600, 800), (500, 750), (160, 250), (900, 1300), (0.006, 0.008), (200, 300), (50, 70), (25, 40))),
    ("VA", FeeTemplate::new((380, 520), (450, 620), (350, 520), (120, 190), (600, 900), (0.005, 0.0075), (130, 210), (40, 58), (20, 32))),
    ("WV", FeeTemplate::new((300, 420), (380, 500), (280, 420), (90, 150), (450, 700), (0.0045, 0.0065), (100, 160), (35, 50), (15, 25))),
    ("DE", FeeTemplate::new((350, 480), (420, 570), (320, 480), (110, 170), (550, 850), (0.005, 0.007), (120, 190), (38, 55), (18, 30))),
    // Southeast
    ("NC", FeeTemplate::new((340, 450), (420, 560), (320, 450), (110, 170), (500, 750), (0.005, 0.007), (120, 190), (38, 55), (18, 30))),
    ("SC", FeeTemplate::new((330, 450), (410, 550), (310, 450), (105, 165), (480, 720), (0.0048, 0.0068), (115, 185), (36, 52), (17, 28))),
    ("GA", FeeTemplate::new((360, 480), (450, 600), (330, 480), (120, 180), (550, 800), (0.0051, 0.0071), (130, 200), (40, 58), (20, 32))),
    ("FL", FeeTemplate::new((400, 550), (500, 700), (480, 700), (140, 220), (600, 900), (0.005, 0.007), (150, 250), (45, 65), (30, 50))),
    ("AL", FeeTemplate::new((300, 420), (380, 500), (280, 420), (100, 160), (450, 650), (0.0045, 0.0065), (100, 160), (35, 50), (15, 28))),
    ("MS", FeeTemplate::new((280, 380), (350, 470), (260, 380), (90, 140), (400, 600), (0.004, 0.006), (90, 150), (32, 45), (12, 24))),
    ("LA", FeeTemplate::new((320, 430), (400, 530), (300, 430), (110, 170), (500, 750), (0.0045, 0.0065), (120, 190), (38, 55), (25, 45))),
    ("AR", FeeTemplate::new((280, 380), (350, 470), (260, 380), (90, 140), (400, 600), (0.004, 0.006), (90, 150), (32, 45), (15, 28))),
    ("TN", FeeTemplate::new((330, 450), (420, 560), (300, 450), (110, 170), (500, 750), (0.0048, 0.0068), (120, 190), (38, 55), (18, 30))),
    ("KY", FeeTemplate::new((300, 420), (380, 500), (280, 420), (100, 160), (450, 650), (0.0045, 0.0065), (100, 160), (35, 50), (15, 28))),
    ("MO", FeeTemplate::new((300, 420), (380, 500), (280, 420), (100, 160), (450, 650), (0.0045, 0.0065), (100, 160), (35, 50), (15, 28))),
    ("OK", FeeTemplate::new((280, 380), (350, 470), (260, 380), (90, 140), (400, 600), (0.004, 0.006), (90, 150), (32, 45), (12, 24))),
    // Midwest
    ("OH", OHIO),
    ("IN", FeeTemplate::new((300, 420), (380, 500), (280, 420), (100, 160), (450, 650), (0.0045, 0.0065), (100, 160), (35, 50), (15, 28))),
    ("IL", FeeTemplate::new((320, 430), (400, 530), (300, 430), (110, 170), (550, 800), (0.0048, 0.0068), (130, 200), (40, 58), (18, 30))),
    ("MI", FeeTemplate::new((320, 430), (400, 530), (300, 430), (110, 170), (500, 750), (0.0045, 0.0065), (120, 190), (38, 55), (18, 30))),
    ("WI", FeeTemplate::new((320, 430), (400, 530), (300, 430), (110, 170), (500, 750), (0.0045, 0.0065), (120, 190), (38, 55), (18, 30))),
    ("MN", FeeTemplate::new((330, 450), (420, 560), (310, 450), (110, 170), (550, 800), (0.0048, 0.0068), (130, 200), (40, 58), (18, 32))),
    ("IA", FeeTemplate::new((280, 380), (350, 470), (260, 380), (90, 140), (400, 600), (0.004, 0.006), (90, 150), (32, 45), (12, 24))),
    ("ND", FeeTemplate::new((250, 340), (320, 430), (240, 340), (80, 120), (350, 500), (0.0038, 0.0052), (80, 130), (30, 42), (10, 20))),
    ("SD", FeeTemplate::new((260, 350), (330, 440), (250, 350), (85, 130), (370, 530), (0.004, 0.0056), (85, 140), (31, 45), (11, 22))),
    ("NE", FeeTemplate::new((270, 360), (340, 450), (260, 360), (90, 140), (400, 600), (0.004, 0.006), (90, 150), (32, 45), (12, 24))),
    // Southwest & Mountain
    ("TX", FeeTemplate::new((360, 480), (450, 600), (420, 600), (120, 180), (350, 500), (0.0045, 0.0065), (140, 220), (40, 58), (20, 35))),
    ("AZ", FeeTemplate::new((380, 520), (480, 640), (480, 700), (90, 140), (350, 500), (0.0048, 0.0068), (140, 220), (40, 58), (20, 32))),
    ("NM", FeeTemplate::new((320, 430), (400, 530), (380, 550), (100, 160), (350, 500), (0.0045, 0.0065), (130, 200), (38, 55), (18, 30))),
    ("CO", FeeTemplate::new((380, 520), (480, 640), (480, 700), (110, 170), (450, 650), (0.0048, 0.0068), (150, 230), (42, 60), (22, 35))),
    ("UT", FeeTemplate::new((350, 480), (430, 570), (420, 600), (100, 160), (400, 600), (0.0045, 0.0065), (130, 200), (38, 55), (18, 30))),
    ("WY", FeeTemplate::new((300, 420), (380, 500), (360, 520), (80, 120), (350, 500), (0.0042, 0.006), (120, 190), (35, 50), (15, 28))),
    ("MT", FeeTemplate::new((300, 420), (380, 500), (360, 520), (80, 120), (350, 500), (0.0042, 0.006), (120, 190), (35, 50), (15, 28))),
    ("ID", FeeTemplate::new((300, 420), (380, 500), (360, 520), (90, 140), (350, 500), (0.0042, 0.006), (120, 190), (35, 50), (15, 28))),
    ("NV", FeeTemplate::new((350, 480), (430, 570), (420, 600), (90, 140), (350, 500), (0.0045, 0.0065), (140, 220), (40, 58), (15, 28))),
    // West
    ("CA", FeeTemplate::new((500, 700), (650, 900), (600, 900), (200, 300), (800, 1200), (0.005, 0.007), (250, 400), (55, 80), (35, 60))),
    ("OR", FeeTemplate::new((380, 520), (480, 640), (420, 600), (120, 180), (450, 650), (0.0048, 0.0068), (150, 230), (42, 60), (20, 35))),
    ("WA", FeeTemplate::new((400, 550), (500, 700), (450, 650), (130, 200), (500, 750), (0.005, 0.007), (160, 250), (45, 65), (22, 38))),
    ("HI", FeeTemplate::new((600, 800), (800, 1100), (700, 1050), (250, 350), (900, 1300), (0.006, 0.008), (300, 450), (70, 100), (50, 80))),
    ("AK", FeeTemplate::new((500, 700), (650, 900), (600, 900), (180, 280), (700, 1050), (0.0055, 0.0075), (200, 320), (50, 75), (30, 50))),
];

/// Resolves region codes to fee templates
///
/// Never mutated during generation. Codes without an entry resolve to the
/// fallback template.
#[derive(Debug, Clone, Copy)]
pub struct FeeTemplateTable<'a> {
    entries: &'a [(&'a str, FeeTemplate)],
    fallback: FeeTemplate,
}

impl FeeTemplateTable<'static> {
    /// The built-in state table with Ohio as fallback
    pub fn standard() -> Self {
        Self::new(STATE_FEE_TEMPLATES, DEFAULT_TEMPLATE_REGION)
    }
}

impl Default for FeeTemplateTable<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> FeeTemplateTable<'a> {
    /// Create a table over `entries`
    ///
    /// `fallback_region` names the entry used for unmapped codes. If it has
    /// no entry itself, the Ohio template is used.
    pub fn new(entries: &'a [(&'a str, FeeTemplate)], fallback_region: &str) -> Self {
        let fallback = match find(entries, fallback_region) {
            Some(template) => *template,
            None => {
                debug!(
                    fallback_region,
                    "Fallback region has no template, using {}", DEFAULT_TEMPLATE_REGION
                );
                OHIO
            }
        };
        Self { entries, fallback }
    }

    /// Template for `code`, or the fallback when the code is not listed
    pub fn template_for(&self, code: &str) -> &FeeTemplate {
        find(self.entries, code).unwrap_or(&self.fallback)
    }

    /// Whether `code` has its own entry
    pub fn contains(&self, code: &str) -> bool {
        find(self.entries, code).is_some()
    }

    pub fn fallback(&self) -> &FeeTemplate {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn find<'t>(entries: &'t [(&str, FeeTemplate)], code: &str) -> Option<&'t FeeTemplate> {
    entries
        .iter()
        .find(|(entry_code, _)| *entry_code == code)
        .map(|(_, template)| template)
}
