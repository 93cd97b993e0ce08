use crate::{
    dimensions::{Axis, DimensionVector},
    twins::{
        profiles::twin_profile,
        types::{TwinBriefing, TwinType},
    },
};

#[derive(Debug, Clone, Copy)]
enum Bound {
    Above(Axis, f64),
    Below(Axis, f64),
}

impl Bound {
    // Missing axes read as 0.0.
    fn holds(self, dimensions: &DimensionVector) -> bool {
        match self {
            Self::Above(axis, threshold) => dimensions.get(axis).unwrap_or(0.0) > threshold,
            Self::Below(axis, threshold) => dimensions.get(axis).unwrap_or(0.0) < threshold,
        }
    }
}

struct HintRule {
    twin: TwinType,
    when: &'static [Bound],
    hint: &'static str,
}

const CONTEXT_TRAITS: [(Bound, &str); 5] = [
    (
        Bound::Above(Axis::Topology, 0.6),
        "thinks in connections and networks",
    ),
    (Bound::Above(Axis::Velocity, 0.7), "prefers fast iteration"),
    (Bound::Above(Axis::Depth, 0.7), "goes deep into topics"),
    (Bound::Above(Axis::Entropy, 0.6), "comfortable with chaos"),
    (Bound::Above(Axis::Evolution, 0.6), "growth-oriented"),
];

const HINT_RULES: [HintRule; 8] = [
    HintRule {
        twin: TwinType::Guardian,
        when: &[Bound::Above(Axis::Depth, 0.7)],
        hint: "Deep focus mode",
    },
    HintRule {
        twin: TwinType::Guardian,
        when: &[Bound::Above(Axis::Velocity, 0.7)],
        hint: "Fast iteration preferred",
    },
    HintRule {
        twin: TwinType::Scout,
        when: &[Bound::Above(Axis::Topology, 0.6)],
        hint: "High connectivity",
    },
    HintRule {
        twin: TwinType::Scout,
        when: &[Bound::Above(Axis::Entropy, 0.6)],
        hint: "Chaos-friendly",
    },
    HintRule {
        twin: TwinType::Synthesizer,
        when: &[
            Bound::Above(Axis::Topology, 0.5),
            Bound::Above(Axis::Depth, 0.5),
        ],
        hint: "Framework builder",
    },
    HintRule {
        twin: TwinType::Synthesizer,
        when: &[Bound::Above(Axis::Evolution, 0.6)],
        hint: "Growth-oriented",
    },
    HintRule {
        twin: TwinType::Mirror,
        when: &[Bound::Below(Axis::Entropy, 0.3)],
        hint: "Consider unexpected angles",
    },
    HintRule {
        twin: TwinType::Mirror,
        when: &[Bound::Below(Axis::Depth, 0.3)],
        hint: "Go deeper",
    },
];

/// Cognitive-style sentence appended to a twin's system prompt. Empty when
/// no trait applies.
pub fn brain_context(dimensions: &DimensionVector) -> String {
    let traits: Vec<&str> = CONTEXT_TRAITS
        .iter()
        .filter(|(bound, _)| bound.holds(dimensions))
        .map(|(_, text)| *text)
        .collect();

    if traits.is_empty() {
        String::new()
    } else {
        format!("\n\nThis person's cognitive style: {}.", traits.join(", "))
    }
}

pub fn resonance_hints(twin: TwinType, dimensions: Option<&DimensionVector>) -> Vec<String> {
    let mut hints: Vec<String> = match dimensions {
        Some(dimensions) => HINT_RULES
            .iter()
            .filter(|rule| rule.twin == twin)
            .filter(|rule| rule.when.iter().all(|bound| bound.holds(dimensions)))
            .map(|rule| rule.hint.to_string())
            .collect(),
        None => Vec::new(),
    };

    if hints.is_empty() {
        hints.push(format!("{} active", twin_profile(twin).name));
    }
    hints
}

pub fn brief(
    twin: TwinType,
    brain_id: &str,
    dimensions: Option<&DimensionVector>,
    query: &str,
) -> TwinBriefing {
    let profile = twin_profile(twin);
    let context = dimensions.map(brain_context).unwrap_or_default();

    TwinBriefing {
        twin_type: twin,
        brain_id: brain_id.to_string(),
        prompt: format!(
            "{}{}\n\nUser question: {}",
            profile.system_prompt, context, query
        ),
        reasoning: profile.reasoning.to_string(),
        suggestions: vec![profile.suggestion.to_string()],
        resonance_hints: resonance_hints(twin, dimensions),
    }
}
