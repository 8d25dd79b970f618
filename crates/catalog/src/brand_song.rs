// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ssok_survey_domain::{Question, StructuralRule, Track};

const STEP_1: &str = "Step 1: How the brand began";
const STEP_2: &str = "Step 2: Feel and atmosphere";
const STEP_3: &str = "Step 3: Core value";
const STEP_4: &str = "Step 4: Identity and message";
const STEP_5: &str = "Step 5: Sensory detail for the song";
const STEP_6: &str = "Step 6: Special questions for the song";

/// Returns the primary-track (brand song) questions, in display order.
///
/// Every entry is a fill-in-the-blank short-text question; a few carry
/// structural rules on the answer text.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn questions() -> Vec<Question> {
    vec![
        Question::short_text(
            Track::Primary,
            "q1",
            "Q1. Why the brand began",
            "Our brand got started because of ________.",
        )
        .in_section(STEP_1)
        .with_example("e.g. customers couldn't find a service that truly delivered"),
        Question::short_text(
            Track::Primary,
            "q2",
            "Q2. The gap customers feel",
            "What our customers find most disappointing about existing competitors is ________.",
        )
        .in_section(STEP_1)
        .with_example("e.g. good quality but overpriced, or cheap but disappointing"),
        Question::short_text(
            Track::Primary,
            "q3",
            "Q3. Our answer to that gap",
            "So we solve that problem with ________.",
        )
        .in_section(STEP_1)
        .with_example("e.g. top quality at a price that stays fair"),
        Question::short_text(
            Track::Primary,
            "q4",
            "Q4. Brand mood",
            "Our brand is like the color ____, and feels like the moment ____.",
        )
        .in_section(STEP_2)
        .with_example("e.g. a warm beige, the unhurried calm of Sunday 2pm")
        .with_rule(StructuralRule::RequiresComma),
        Question::short_text(
            Track::Primary,
            "q5",
            "Q5. How customers feel",
            "Customers say experiencing our brand feels like ________.",
        )
        .in_section(STEP_2)
        .with_example("e.g. being with an old friend you can trust / a slow holiday morning"),
        Question::short_text(
            Track::Primary,
            "q6",
            "Q6. What we never are",
            "Our brand is absolutely never a ________ kind of feeling.",
        )
        .in_section(STEP_2)
        .with_example("e.g. busy and flashy with nothing behind it"),
        Question::short_text(
            Track::Primary,
            "q7",
            "Q7. What we're proudest of",
            "What we most confidently offer our customers is ________.",
        )
        .in_section(STEP_3)
        .with_example("e.g. customer service you can rely on around the clock"),
        Question::short_text(
            Track::Primary,
            "q8",
            "Q8. What makes it different",
            "What sets this apart from other brands is ________.",
        )
        .in_section(STEP_3)
        .with_example("e.g. treating every single customer like family"),
        Question::short_text(
            Track::Primary,
            "q9",
            "Q9. What customers say",
            "What customers most often tell us after experiencing it is ________.",
        )
        .in_section(STEP_3)
        .with_example("e.g. \"I can really trust this place\""),
        Question::short_text(
            Track::Primary,
            "q10",
            "Q10. The signature scene",
            "The scene that comes to mind first for our brand is ________.",
        )
        .in_section(STEP_4)
        .with_example("e.g. a staff member thanking a customer like they mean it"),
        Question::short_text(
            Track::Primary,
            "q11",
            "Q11. The feeling to leave behind",
            "We want customers to walk away feeling ________.",
        )
        .in_section(STEP_4)
        .with_example("e.g. that today was a genuinely good choice / quietly comforted"),
        Question::short_text(
            Track::Primary,
            "q12",
            "Q12. One-sentence introduction",
            "If we introduced our brand to someone, we would say ________.",
        )
        .in_section(STEP_4)
        .with_example("e.g. the place that actually cares about its customers"),
        Question::short_text(
            Track::Primary,
            "q13",
            "Q13. First impression",
            "The first feeling our brand evokes is ________.",
        )
        .in_section(STEP_5)
        .with_example("e.g. warm and steady / grand and dependable"),
        Question::short_text(
            Track::Primary,
            "q14",
            "Q14. The brand's tempo",
            "The tempo of our brand feels like ________.",
        )
        .in_section(STEP_5)
        .with_example("e.g. a calm but forceful march / jazz that flows along lightly"),
        Question::short_text(
            Track::Primary,
            "q15",
            "Q15. Target customers",
            "Our main customers are ____ in their ____.",
        )
        .in_section(STEP_5)
        .with_example("e.g. office workers with families, in their 30s")
        .with_rule(StructuralRule::MinWordCount(2)),
        Question::short_text(
            Track::Primary,
            "q16",
            "Q16. When the brand shines",
            "Our brand shines brightest when ________.",
        )
        .in_section(STEP_5)
        .with_example("e.g. a customer is in a bind / the morning rush / a moment of self-care"),
        Question::short_text(
            Track::Primary,
            "q17",
            "Q17. Brand philosophy",
            "What we care about most in running the brand is ________.",
        )
        .in_section(STEP_5)
        .with_example("e.g. always keeping a promise made to a customer"),
        Question::short_text(
            Track::Primary,
            "q18",
            "Q18. Three keywords",
            "The three words that best express our brand are ____, ____ and ____.",
        )
        .in_section(STEP_6)
        .with_example("e.g. \"warmth, trust, expertise\" / \"youth, energy, daring\"")
        .with_rule(StructuralRule::ExactCommaTokens(3)),
        Question::short_text(
            Track::Primary,
            "q19",
            "Q19. Core message or slogan",
            "The one message the song must carry is ________. If you have a slogan, include it.",
        )
        .in_section(STEP_6)
        .with_example("e.g. \"growing together with our customers\", \"always by your side\""),
        Question::short_text(
            Track::Primary,
            "q20",
            "Q20. Preferred music style",
            "The music style that suits our brand is ________.",
        )
        .in_section(STEP_6)
        .with_example("e.g. a warm, hopeful ballad / upbeat high-energy pop / polished jazz"),
    ]
}
