/// One classification rule. A record whose search text contains any of the
/// keywords gets the rule's topic; rule order within a category is the
/// tie-break, first match wins.
pub struct TopicRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
}

/// Catch-all topic for unresolved categories and unmatched records.
pub const GENERAL_TOPIC: &str = "general";

// Keywords are matched as lowercase substrings of the record's search text.

const AGRICULTURE_RULES: &[TopicRule] = &[
    TopicRule {
        topic: "crops",
        keywords: &["kharif", "rabi", "zaid", "wheat", "rice", "paddy", "sugarcane", "millet", "pulses", "cropping"],
    },
    TopicRule {
        topic: "soils",
        keywords: &["soil", "alluvial", "laterite", "humus", "erosion"],
    },
    TopicRule {
        topic: "irrigation",
        keywords: &["irrigation", "canal", "drip", "sprinkler", "watershed", "groundwater"],
    },
    TopicRule {
        topic: "animal-husbandry",
        keywords: &["dairy", "poultry", "livestock", "fisheries", "cattle", "white revolution"],
    },
    TopicRule {
        topic: "horticulture",
        keywords: &["horticulture", "floriculture", "orchard", "fruit", "vegetable"],
    },
];

const ECONOMY_RULES: &[TopicRule] = &[
    TopicRule {
        topic: "banking",
        keywords: &["rbi", "reserve bank", "repo rate", "reverse repo", "monetary policy", "crr", "slr", "npa", "bank"],
    },
    TopicRule {
        topic: "fiscal",
        keywords: &["budget", "fiscal deficit", "gst", "taxation", "tax", "subsidy", "disinvestment", "finance commission"],
    },
    TopicRule {
        topic: "markets",
        keywords: &["sebi", "stock exchange", "sensex", "nifty", "mutual fund", "ipo", "debenture"],
    },
    TopicRule {
        topic: "trade",
        keywords: &["export", "import", "wto", "fdi", "forex", "balance of payments", "tariff", "current account"],
    },
    TopicRule {
        topic: "indicators",
        keywords: &["gdp", "gnp", "inflation", "cpi", "wpi", "national income", "per capita", "poverty line"],
    },
];

const GK_RULES: &[TopicRule] = &[
    TopicRule {
        topic: "polity",
        keywords: &["constitution", "article", "parliament", "lok sabha", "rajya sabha", "president", "supreme court", "fundamental rights", "amendment"],
    },
    TopicRule {
        topic: "science",
        keywords: &["vitamin", "physics", "chemistry", "planet", "satellite", "isro", "dna", "chemical"],
    },
    TopicRule {
        topic: "sports",
        keywords: &["olympic", "cricket", "hockey", "tournament", "medal", "world cup", "grand slam"],
    },
    TopicRule {
        topic: "awards",
        keywords: &["nobel", "bharat ratna", "padma", "arjuna award", "booker", "jnanpith"],
    },
];

const HISTORY_RULES: &[TopicRule] = &[
    TopicRule {
        topic: "ancient",
        keywords: &["indus valley", "harappa", "mohenjo", "vedic", "maurya", "ashoka", "gupta", "buddhism", "jainism"],
    },
    TopicRule {
        topic: "medieval",
        keywords: &["delhi sultanate", "mughal", "akbar", "aurangzeb", "vijayanagara", "bhakti", "sufi", "maratha"],
    },
    TopicRule {
        topic: "modern",
        keywords: &["british", "east india company", "1857", "gandhi", "congress", "viceroy", "partition", "independence", "swadeshi"],
    },
];

const GEOGRAPHY_RULES: &[TopicRule] = &[
    TopicRule {
        topic: "rivers",
        keywords: &["river", "ganga", "brahmaputra", "godavari", "krishna", "tributary", "delta", "estuary"],
    },
    TopicRule {
        topic: "climate",
        keywords: &["monsoon", "climate", "rainfall", "cyclone", "el nino", "western disturbance"],
    },
    TopicRule {
        topic: "physical",
        keywords: &["himalaya", "mountain", "plateau", "desert", "ghats", "peninsula", "glacier"],
    },
    TopicRule {
        topic: "world",
        keywords: &["continent", "ocean", "equator", "tropic", "strait", "canal", "hemisphere"],
    },
];

const ENGLISH_RULES: &[TopicRule] = &[
    TopicRule {
        topic: "grammar",
        keywords: &["tense", "voice", "preposition", "conjunction", "parts of speech", "sentence correction", "narration"],
    },
    TopicRule {
        topic: "vocabulary",
        keywords: &["synonym", "antonym", "one word substitution", "idiom", "phrase", "spelling"],
    },
    TopicRule {
        topic: "comprehension",
        keywords: &["passage", "comprehension", "cloze", "inference"],
    },
];

const APTITUDE_RULES: &[TopicRule] = &[
    TopicRule {
        topic: "arithmetic",
        keywords: &["percentage", "ratio", "proportion", "simple interest", "compound interest", "profit", "loss", "average", "time and work", "speed"],
    },
    TopicRule {
        topic: "algebra",
        keywords: &["equation", "polynomial", "quadratic", "linear", "expression"],
    },
    TopicRule {
        topic: "geometry",
        keywords: &["triangle", "circle", "rectangle", "angle", "area", "perimeter", "volume", "mensuration"],
    },
    TopicRule {
        topic: "data-interpretation",
        keywords: &["bar graph", "pie chart", "table", "histogram", "data given"],
    },
];

fn rules_for(category: CategoryKey) -> &'static [TopicRule] {
    match category {
        CategoryKey::Agriculture => AGRICULTURE_RULES,
        CategoryKey::Economy => ECONOMY_RULES,
        CategoryKey::Gk => GK_RULES,
        CategoryKey::History => HISTORY_RULES,
        CategoryKey::Geography => GEOGRAPHY_RULES,
        CategoryKey::English => ENGLISH_RULES,
        CategoryKey::Aptitude => APTITUDE_RULES,
    }
}

/// Assigns a topic label to one question record.
///
/// Walks the category's rules in their defined order and returns the topic
/// of the first rule with a keyword hit. Unresolved categories and records
/// no rule matches get [`GENERAL_TOPIC`]. Pure and deterministic: no I/O,
/// identical inputs always give the same label.
pub fn classify(category: Option<CategoryKey>, record: &Map<String, Value>) -> &'static str {
    let Some(category) = category else {
        return GENERAL_TOPIC;
    };

    let text = search_text(record);
    for rule in rules_for(category) {
        if rule.keywords.iter().any(|keyword| text.contains(keyword)) {
            return rule.topic;
        }
    }
    GENERAL_TOPIC
}

/// The lowercased haystack keywords are matched against: question text,
/// explanation, category label, then each option's text, space-joined in
/// that fixed order. Missing or non-string fields contribute nothing.
fn search_text(record: &Map<String, Value>) -> String {
    let mut parts: Vec<&str> = vec![
        field_text(record, "Question", "question"),
        field_text(record, "Explanation", "explanation"),
        field_text(record, "Category", "category"),
    ];
    parts.extend(option_texts(record));
    parts.join(" ").to_lowercase()
}

use crate::categories::CategoryKey;
use crate::question_bank::{field_text, option_texts};
use serde_json::{Map, Value};
