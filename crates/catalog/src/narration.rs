// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ssok_survey_domain::{ChoiceOption, Question, StructuralRule, Track};

/// Returns the secondary-track (narration) questions, in display order.
///
/// Mixes single-choice style questions with free-text prompts; three of the
/// early content questions accept "not applicable" for customers who have
/// nothing prepared yet.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn questions() -> Vec<Question> {
    vec![
        Question::single_choice(
            Track::Secondary,
            "content_readiness",
            "Q1. How ready is your narration content?",
            "Do you already know what the narration should say, or the direction it should take?",
            vec![
                ChoiceOption::new("A concrete script or copy is ready"),
                ChoiceOption::new("A rough concept or direction is set"),
                ChoiceOption::new("I have a sample or reference to point to"),
                ChoiceOption::new("Nothing concrete yet"),
            ],
        )
        .in_section("Narration content"),
        Question::long_text(
            Track::Secondary,
            "prepared_content",
            "Q2. The narration you have in mind",
            "If you have content prepared, what narration are you looking to produce?",
        )
        .in_section("Narration content")
        .with_example(
            "e.g. \"store introduction + signature menu\", \"company history + key services\", \
             \"brand story + what sets us apart\", \"event notice + contact details\"",
        )
        .not_applicable_allowed(),
        Question::long_text(
            Track::Secondary,
            "existing_script",
            "Q3. Script or concept on hand",
            "If you have anything written, sketch the script or concept you currently hold.",
        )
        .in_section("Narration content")
        .with_example("Paste or summarize the script or concept you have")
        .not_applicable_allowed(),
        Question::long_text(
            Track::Secondary,
            "reference_style",
            "Q4. A narration style to reference",
            "Is there a narration style or reference you would like us to follow?",
        )
        .in_section("Narration style")
        .with_example(
            "e.g. \"trustworthy like a bank's phone guidance\", \"friendly like a cafe's \
             in-store announcements\", \"polished like a brand commercial\"",
        )
        .not_applicable_allowed(),
        Question::long_text(
            Track::Secondary,
            "improvement_goal",
            "Q5. What to improve in the business",
            "What part of running your business do you most want to improve right now?",
        )
        .in_section("Business goals")
        .with_example(
            "e.g. \"brand awareness\", \"attracting new customers\", \"repeat visits\", \
             \"standing out from competitors\", \"service credibility\"",
        ),
        Question::long_text(
            Track::Secondary,
            "business_introduction",
            "Q6. Your business in one sentence",
            "If you introduced your business in a single sentence, how would you put it?",
        )
        .in_section("Business info")
        .with_example(
            "e.g. \"a repair shop run by technicians with 20 years of experience\", \
             \"the neighborhood restaurant that only uses fresh ingredients at fair prices\"",
        ),
        Question::single_choice(
            Track::Secondary,
            "core_goal",
            "Q7. The narration's core goal",
            "What is the core goal you want this narration to achieve?",
            vec![
                ChoiceOption::new("Raise awareness (make our presence known)"),
                ChoiceOption::new("Drive selection (be chosen over competitors)"),
                ChoiceOption::new("Bring customers back (retain existing customers)"),
                ChoiceOption::new("Spread recommendations (have customers tell others)"),
            ],
        )
        .in_section("Narration goal"),
        Question::long_text(
            Track::Secondary,
            "customer_situation",
            "Q8. Your customers' typical situation",
            "What situation are customers usually in when they visit?",
        )
        .in_section("Customer insight")
        .with_example(
            "e.g. \"office workers grabbing a quick lunch\", \"afternoon visitors lingering \
             over tea and conversation\", \"people who want to finish an errand and leave\"",
        ),
        Question::long_text(
            Track::Secondary,
            "selection_reason",
            "Q9. Why customers choose you",
            "What is the core reason customers pick your service?",
        )
        .in_section("Customer insight")
        .with_example(
            "e.g. \"speed\", \"fair prices\", \"reliability\", \"easy access\", \
             \"specialized expertise\", \"personal attention\"",
        ),
        Question::long_text(
            Track::Secondary,
            "hesitation_reason",
            "Q10. Why customers hesitate",
            "Conversely, what makes customers hesitate or choose somewhere else?",
        )
        .in_section("Customer insight")
        .with_example(
            "e.g. \"price\", \"location\", \"doubts about reliability\", \"waiting time\", \
             \"low brand awareness\"",
        ),
        Question::single_choice(
            Track::Secondary,
            "customer_relationship",
            "Q11. Your relationship with customers",
            "Which of these best describes the relationship between you and your customers?",
            vec![
                ChoiceOption::new("Expert and client (trusted for specialized skill)"),
                ChoiceOption::new("Friends (easy, unguarded conversation)"),
                ChoiceOption::new("Family (warm and attentive)"),
                ChoiceOption::new("Mentor and learner (teaching and guiding)"),
                ChoiceOption::new("Partners (solving problems together)"),
            ],
        )
        .in_section("Customer relationship"),
        Question::ranked_choice(
            Track::Secondary,
            "priority_ranking",
            "Q12. What matters most",
            "Rank your top three priorities among the following.",
            vec![
                ChoiceOption::new("A. Explaining the services and work we offer"),
                ChoiceOption::new("B. Emphasizing our edge over competitors"),
                ChoiceOption::new("C. Basics like location and opening hours"),
                ChoiceOption::new("D. Promoting special perks or standout services"),
                ChoiceOption::new("E. Conveying trust and expertise"),
                ChoiceOption::new("F. Creating friendliness and comfort"),
            ],
        )
        .in_section("Priorities"),
        Question::long_text(
            Track::Secondary,
            "unique_strength",
            "Q13. Your clearest advantage",
            "What strength clearly separates you from competitors?",
        )
        .in_section("Differentiation")
        .with_example(
            "e.g. \"20 years of accumulated know-how\", \"the only 24-hour service in the \
             area\", \"individually tailored solutions\", \"a complete after-care system\"",
        ),
        Question::single_choice(
            Track::Secondary,
            "recommendation_style",
            "Q14-1. How you recommend",
            "When talking with customers, which recommendation style is closer to yours?",
            vec![
                ChoiceOption::new("Recommend with conviction (\"this is the one I'd go with\")"),
                ChoiceOption::new("Respect their choice (\"which would you prefer?\")"),
            ],
        )
        .in_section("Communication style"),
        Question::single_choice(
            Track::Secondary,
            "explanation_style",
            "Q14-2. How you explain",
            "When talking with customers, which explanation style is closer to yours?",
            vec![
                ChoiceOption::new("Explain first (\"here's what makes this good\")"),
                ChoiceOption::new("Listen first, then answer (\"what would you like to know?\")"),
            ],
        )
        .in_section("Communication style"),
        Question::single_choice(
            Track::Secondary,
            "conversation_tone",
            "Q14-3. Your everyday tone",
            "When talking with customers, which tone is closer to yours?",
            vec![
                ChoiceOption::new("Friendly and personal (\"lovely weather today\")"),
                ChoiceOption::new("Courteous and professional (\"how may I help you?\")"),
            ],
        )
        .in_section("Communication style"),
        Question::single_choice(
            Track::Secondary,
            "hesitant_customer_response",
            "Q15-1. A hesitating customer",
            "How do you respond to a customer who is hesitating?",
            vec![
                ChoiceOption::new("\"Rest assured, you'll be more than satisfied\""),
                ChoiceOption::new("\"Our other customers have been very happy\""),
                ChoiceOption::new("\"Take your time and decide when you're ready\""),
                ChoiceOption::new("\"Ask me anything, whenever you like\""),
            ],
        )
        .in_section("Situational responses"),
        Question::single_choice(
            Track::Secondary,
            "premium_option_response",
            "Q15-2. Suggesting a premium option",
            "How do you respond when suggesting a higher-priced option?",
            vec![
                ChoiceOption::new("\"This option is clearly the better one\""),
                ChoiceOption::new("\"It's best to choose what fits your budget\""),
                ChoiceOption::new("\"Each has its own trade-offs\""),
                ChoiceOption::new("\"Which factor matters most to you?\""),
            ],
        )
        .in_section("Situational responses"),
        Question::single_choice(
            Track::Secondary,
            "problem_response",
            "Q15-3. When something goes wrong",
            "How do you respond when a problem comes up?",
            vec![
                ChoiceOption::new("\"I'm sorry — we'll fix it right away\""),
                ChoiceOption::new("\"Let me get a clear picture of what happened\""),
                ChoiceOption::new("\"Let's work out a solution together\""),
                ChoiceOption::new("\"We'll make sure it doesn't happen again\""),
            ],
        )
        .in_section("Situational responses"),
        Question::single_choice(
            Track::Secondary,
            "listening_focus",
            "Q16-1. How closely customers listen",
            "How much attention can customers give the narration in your space?",
            vec![
                ChoiceOption::new("They can focus and hear it through to the end"),
                ChoiceOption::new("It plays in the background while they do other things"),
            ],
        )
        .in_section("In-store context"),
        Question::single_choice(
            Track::Secondary,
            "stay_duration",
            "Q16-2. How long customers stay",
            "How long do customers usually stay?",
            vec![
                ChoiceOption::new("Most stay only briefly"),
                ChoiceOption::new("Most take their time"),
            ],
        )
        .in_section("In-store context"),
        Question::single_choice(
            Track::Secondary,
            "interest_level",
            "Q16-3. How interested they arrive",
            "How interested are customers in the narration when they hear it?",
            vec![
                ChoiceOption::new("Already interested and wanting more information"),
                ChoiceOption::new("Hearing it by chance — interest has to be sparked"),
            ],
        )
        .in_section("In-store context"),
        Question::single_choice(
            Track::Secondary,
            "decision_stage",
            "Q16-4. Where they are in deciding",
            "At what decision stage do customers hear the narration?",
            vec![
                ChoiceOption::new("Nearly decided, doing a final check"),
                ChoiceOption::new("Comparing several alternatives"),
                ChoiceOption::new("First contact, needing the basics"),
            ],
        )
        .in_section("In-store context"),
        Question::single_choice(
            Track::Secondary,
            "desired_action",
            "Q17. The action you want most",
            "After hearing the narration in your space, what should a customer do first?",
            vec![
                ChoiceOption::new("Take an interest in additional menu items or services"),
                ChoiceOption::new("Ask the staff a question or request a consultation"),
                ChoiceOption::new("Stay longer and enjoy the atmosphere"),
                ChoiceOption::new("Come away trusting and liking the brand"),
                ChoiceOption::new("Remember us and visit again"),
                ChoiceOption::new("Want to recommend this place to others"),
            ],
        )
        .in_section("Customer action"),
        Question::long_text(
            Track::Secondary,
            "main_offerings",
            "Q18. Main offerings (up to 5)",
            "List the main programs or services the narration should mention, up to five.",
        )
        .in_section("Practical details")
        .with_example("e.g. \"haircut, coloring, scalp care\" — separate items with commas")
        .with_rule(StructuralRule::MaxCommaTokens(5)),
        Question::multi_choice(
            Track::Secondary,
            "brand_moods",
            "Q19. Moods that fit (up to 3)",
            "Which moods should the narration carry? Choose up to three.",
            vec![
                ChoiceOption::new("Warm"),
                ChoiceOption::new("Energetic"),
                ChoiceOption::new("Calm"),
                ChoiceOption::new("Luxurious"),
                ChoiceOption::new("Playful"),
                ChoiceOption::new("Professional"),
                ChoiceOption::with_detail("Other (please specify)"),
            ],
        )
        .in_section("Sound direction")
        .capped(3),
        Question::single_choice(
            Track::Secondary,
            "voice_preference",
            "Q20. Preferred voice",
            "What kind of voice should read the narration?",
            vec![
                ChoiceOption::new("Female voice"),
                ChoiceOption::new("Male voice"),
                ChoiceOption::new("No preference — recommend one"),
                ChoiceOption::with_detail("Other (please specify)"),
            ],
        )
        .in_section("Sound direction"),
        Question::long_text(
            Track::Secondary,
            "promotion_details",
            "Q21. Promotions to announce",
            "If a promotion or notice should be included, describe the kind of news, the \
             content, and the period or conditions — one per line.",
        )
        .in_section("Practical details")
        .with_example("e.g. \"grand-opening discount / 20% off all drinks / through March 31\"")
        .with_rule(StructuralRule::MinLines(2))
        .not_applicable_allowed(),
        Question::long_text(
            Track::Secondary,
            "essential_information",
            "Q22. Must-include information",
            "Is there information or wording the narration absolutely must include?",
        )
        .in_section("Practical details")
        .with_example(
            "e.g. \"business name and main phone number\", \"key service names\", \
             \"opening hours\", \"location\", \"certifications\", \"brand slogan\"",
        ),
        Question::long_text(
            Track::Secondary,
            "avoid_tone",
            "Q23. Tones to avoid",
            "Is there a tone or feeling the narration must avoid?",
        )
        .in_section("Practical details")
        .with_example(
            "e.g. \"overly loud\", \"too formal\", \"exaggerated salesmanship\", \
             \"dense jargon\", \"a rushed, pushy feel\"",
        ),
    ]
}
