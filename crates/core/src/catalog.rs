//! The static course catalog: three weeks of entrepreneurship content.
//!
//! Content lives here as data; the lesson view renders whatever the catalog
//! describes, so adding a lesson is a catalog change, not a new page.

use crate::model::{
    ChecklistStep, CompletionRule, InfoCard, Lesson, LessonKey, Quiz, QuizQuestion, Quote,
    ResponseField, ScenarioChoice, Section, SectionBody, SectionId, SortingActivity,
    SortingBucket, SortingItem, Story, Week,
};

/// The full course: weeks → lessons → sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    weeks: Vec<Week>,
}

impl Catalog {
    /// Builds the standard Start Academy curriculum.
    ///
    /// # Panics
    ///
    /// Panics only if the hard-coded content is internally inconsistent,
    /// which the catalog tests rule out.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            weeks: vec![
                Week::new(
                    1,
                    "Introduction to Entrepreneurship",
                    vec![week1_lesson1(), week1_lesson2()],
                ),
                Week::new(
                    2,
                    "Branding & Identity",
                    vec![week2_lesson1(), week2_lesson2()],
                ),
                Week::new(3, "Agile Project Management", vec![week3_lesson1()]),
            ],
        }
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    #[must_use]
    pub fn week(&self, number: u8) -> Option<&Week> {
        self.weeks.iter().find(|w| w.number() == number)
    }

    #[must_use]
    pub fn lesson(&self, key: LessonKey) -> Option<&Lesson> {
        self.week(key.week())
            .and_then(|week| week.lessons().iter().find(|l| l.key() == key))
    }

    #[must_use]
    pub fn lesson_keys(&self) -> Vec<LessonKey> {
        self.weeks
            .iter()
            .flat_map(|week| week.lessons().iter().map(Lesson::key))
            .collect()
    }
}

// ─── Builders ──────────────────────────────────────────────────────────────────

fn sid(id: &str) -> SectionId {
    SectionId::new(id).expect("section id is non-blank")
}

fn key(week: u8, lesson: u8) -> LessonKey {
    LessonKey::new(week, lesson).expect("catalog keys are 1-based")
}

fn field(label: &str, placeholder: &str, multiline: bool) -> ResponseField {
    ResponseField {
        label: label.to_owned(),
        placeholder: placeholder.to_owned(),
        multiline,
    }
}

fn question(prompt: &str, options: &[&str], answer: usize) -> QuizQuestion {
    QuizQuestion::new(
        prompt,
        options.iter().map(ToString::to_string).collect(),
        answer,
    )
    .expect("catalog quiz question is valid")
}

fn week1_lesson1() -> Lesson {
    let sections = vec![
        Section::new(
            sid("introduction"),
            "Introduction",
            SectionBody::Reading {
                paragraphs: vec![
                    "Entrepreneurship is the process of designing, launching, and running a \
                     new business. It starts with noticing a problem worth solving and ends \
                     with building something people actually want."
                        .to_owned(),
                ],
                bullets: Vec::new(),
                quote: Some(Quote {
                    text: "The best entrepreneurs aren't just building companies; they're \
                           solving meaningful problems and creating value for society."
                        .to_owned(),
                    attribution: "Paul Graham, Co-founder of Y Combinator".to_owned(),
                }),
            },
        ),
        Section::new(
            sid("characteristics"),
            "Entrepreneur Traits",
            SectionBody::TraitChecklist {
                prompt: "Check off the traits you feel you have:".to_owned(),
                traits: vec![
                    "Vision and Creativity".to_owned(),
                    "Resilience and Persistence".to_owned(),
                    "Risk Tolerance".to_owned(),
                    "Adaptability".to_owned(),
                    "Customer Focus".to_owned(),
                ],
            },
        ),
        Section::new(
            sid("stories"),
            "Stories Carousel",
            SectionBody::StoryCarousel {
                stories: vec![
                    Story {
                        name: "Airbnb".to_owned(),
                        problem: "Expensive hotels, lack of affordable lodging.".to_owned(),
                        solution: "Let people rent out their homes to travelers.".to_owned(),
                    },
                    Story {
                        name: "Spanx".to_owned(),
                        problem: "Uncomfortable, visible undergarments for women.".to_owned(),
                        solution: "Invented comfortable, invisible shapewear.".to_owned(),
                    },
                    Story {
                        name: "Stripe".to_owned(),
                        problem: "Hard for startups to accept online payments.".to_owned(),
                        solution: "Easy-to-integrate payment platform for developers.".to_owned(),
                    },
                ],
            },
        ),
        Section::new(
            sid("brainstorm"),
            "Problem/Solution",
            SectionBody::FreeResponse {
                intro: "Think of a real-world problem you notice. How would you solve it as \
                        an entrepreneur?"
                    .to_owned(),
                fields: vec![
                    field("Problem", "Describe a problem...", false),
                    field("Solution", "How would you solve it?", true),
                ],
                feedback: "Great entrepreneurial thinking! Every business starts with a \
                           problem and a solution."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("riskreward"),
            "Risk/Reward",
            SectionBody::Sorting(
                SortingActivity::new(
                    "Drag each item to either \"Risk\" or \"Reward\" for a startup founder:",
                    vec![
                        SortingBucket::new("risk", "Risk"),
                        SortingBucket::new("reward", "Reward"),
                    ],
                    vec![
                        SortingItem::open("Running out of money"),
                        SortingItem::open("Competitors copying idea"),
                        SortingItem::open("Learning new skills"),
                        SortingItem::open("Making a difference"),
                        SortingItem::open("Flexible schedule"),
                        SortingItem::open("Uncertain income"),
                        SortingItem::open("Personal growth"),
                        SortingItem::open("Helping others"),
                    ],
                    "Nice! Every founder faces both risks and rewards. Knowing the \
                     difference is key.",
                    "",
                )
                .expect("risk/reward activity is valid"),
            ),
        ),
        Section::new(
            sid("empathy"),
            "Empathy Map",
            SectionBody::FreeResponse {
                intro: "Fill in the empathy map for your customer:".to_owned(),
                fields: vec![
                    field("What do they see?", "", false),
                    field("What do they hear?", "", false),
                    field("What do they think?", "", false),
                    field("What do they feel?", "", false),
                ],
                feedback: "Empathy is the secret weapon of great entrepreneurs. \
                           Understanding your customer is everything!"
                    .to_owned(),
            },
        ),
        Section::new(
            sid("mindset"),
            "Mindset",
            SectionBody::MindsetSlider {
                prompt: "Where do you fall on the mindset spectrum?".to_owned(),
                low_label: "Fixed".to_owned(),
                high_label: "Growth".to_owned(),
            },
        ),
        Section::new(
            sid("yc"),
            "YC Scenario",
            SectionBody::Scenario {
                prompt: "What would you do first as a founder?".to_owned(),
                choices: vec![
                    ScenarioChoice {
                        label: "Talk to users".to_owned(),
                        feedback: "Correct! YC says: Talk to users and solve real problems."
                            .to_owned(),
                        correct: true,
                    },
                    ScenarioChoice {
                        label: "Perfect the product".to_owned(),
                        feedback: "Not quite! YC says: Focus on the problem, not just the \
                                   product."
                            .to_owned(),
                        correct: false,
                    },
                ],
            },
        ),
        Section::new(
            sid("reflection"),
            "Mini-Reflection",
            SectionBody::FreeResponse {
                intro: "What's one thing you learned about entrepreneurship today?".to_owned(),
                fields: vec![field("Reflection", "", true)],
                feedback: "Awesome! Reflection is how you turn experience into wisdom."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("quiz"),
            "Quiz",
            SectionBody::Quiz(
                Quiz::new(vec![
                    question(
                        "What is the most important trait for an entrepreneur?",
                        &["Creativity", "Persistence", "Luck", "Money"],
                        1,
                    ),
                    question(
                        "What does YC emphasize most?",
                        &[
                            "Perfect product",
                            "Solving real problems",
                            "Big team",
                            "Fancy office",
                        ],
                        1,
                    ),
                ])
                .expect("week 1 lesson 1 quiz is valid"),
            ),
        ),
    ];

    Lesson::new(
        key(1, 1),
        "What is Entrepreneurship?",
        "Learn the fundamentals of entrepreneurship and what it takes to be a successful \
         entrepreneur.",
        45,
        sections,
        CompletionRule::SectionsVisited,
    )
    .expect("week 1 lesson 1 is valid")
}

fn week1_lesson2() -> Lesson {
    let sections = vec![
        Section::new(
            sid("introduction"),
            "Introduction",
            SectionBody::Reading {
                paragraphs: vec![
                    "Every great business starts with a single idea. But where do ideas come \
                     from? The best entrepreneurs don't wait for inspiration; they train \
                     themselves to spot problems, connect dots, and imagine new \
                     possibilities."
                        .to_owned(),
                ],
                bullets: vec![
                    "Spot everyday problems and frustrations".to_owned(),
                    "Observe trends and changes in the world".to_owned(),
                    "Ask \"what if?\" and challenge assumptions".to_owned(),
                    "Combine ideas from different fields".to_owned(),
                    "Listen deeply to what people need".to_owned(),
                ],
                quote: Some(Quote {
                    text: "Ideas are easy. Implementation is hard.".to_owned(),
                    attribution: "Guy Kawasaki, Entrepreneur & Author".to_owned(),
                }),
            },
        ),
        Section::new(
            sid("mindmap"),
            "Mind Mapping Workshop",
            SectionBody::MindMap {
                intro: "Mind maps are a powerful, visual way to organize your thoughts and \
                        discover new connections. Instead of writing a boring business plan, \
                        start with a mind map."
                    .to_owned(),
                instructions: vec![
                    "Start with a central idea (your business or problem).".to_owned(),
                    "Add branches for customer needs, solutions, features, competitors, etc."
                        .to_owned(),
                    "Drag nodes to rearrange. Double-click a node to delete it.".to_owned(),
                    "Be creative: there are no wrong answers!".to_owned(),
                ],
            },
        ),
        Section::new(
            sid("marketstructure"),
            "Market Structure Explorer",
            SectionBody::Sorting(
                SortingActivity::new(
                    "Not all markets are the same! Drag each company to the structure it \
                     belongs to:",
                    vec![
                        SortingBucket::new("monopoly", "Monopoly")
                            .with_description("A single company dominates the entire market.")
                            .with_example("Google (Search)"),
                        SortingBucket::new("oligopoly", "Oligopoly")
                            .with_description(
                                "A few large companies control most of the market.",
                            )
                            .with_example("Airbus & Boeing (Airplanes)"),
                        SortingBucket::new("competitive", "Competitive")
                            .with_description("Many companies compete freely.")
                            .with_example("Coffee Shops"),
                    ],
                    vec![
                        SortingItem::graded("Google (Search)", "monopoly"),
                        SortingItem::graded("Airbus & Boeing", "oligopoly"),
                        SortingItem::graded("Local Cafés", "competitive"),
                        SortingItem::graded("Coca-Cola & Pepsi", "oligopoly"),
                        SortingItem::graded("Amazon (E-commerce)", "competitive"),
                        SortingItem::graded("Microsoft Windows", "monopoly"),
                    ],
                    "Awesome! All matches are correct. You really get market structures!",
                    "Try again or show answers!",
                )
                .expect("market structure activity is valid"),
            ),
        ),
        Section::new(
            sid("ideavalidation"),
            "Idea Validation Challenge",
            SectionBody::ValidationChecklist {
                intro: "Great ideas need validation! Work through this checklist to see if \
                        your business idea is ready for the real world."
                    .to_owned(),
                steps: vec![
                    ChecklistStep {
                        label: "Is there a real problem?".to_owned(),
                        prompt: "Describe the problem your idea solves.".to_owned(),
                    },
                    ChecklistStep {
                        label: "Have you talked to potential customers?".to_owned(),
                        prompt: "What did you learn from them?".to_owned(),
                    },
                    ChecklistStep {
                        label: "Is your solution unique or better?".to_owned(),
                        prompt: "How is your idea different or better than what's out there?"
                            .to_owned(),
                    },
                    ChecklistStep {
                        label: "Can you reach your customers?".to_owned(),
                        prompt: "How will you find and reach your first users?".to_owned(),
                    },
                    ChecklistStep {
                        label: "Will people pay (or use) it?".to_owned(),
                        prompt: "Why would someone pay for or use your solution?".to_owned(),
                    },
                ],
            },
        ),
        Section::new(
            sid("competitiveanalysis"),
            "Competitive Analysis Tool",
            SectionBody::Sorting(
                SortingActivity::new(
                    "Use this interactive SWOT grid to analyze your business idea. Drag \
                     each card into the quadrant where it fits best.",
                    vec![
                        SortingBucket::new("strengths", "Strengths"),
                        SortingBucket::new("weaknesses", "Weaknesses"),
                        SortingBucket::new("opportunities", "Opportunities"),
                        SortingBucket::new("threats", "Threats"),
                    ],
                    vec![
                        SortingItem::graded("Strong brand", "strengths"),
                        SortingItem::graded("High costs", "weaknesses"),
                        SortingItem::graded("New market", "opportunities"),
                        SortingItem::graded("Aggressive competitors", "threats"),
                        SortingItem::graded("Loyal customers", "strengths"),
                        SortingItem::graded("Limited resources", "weaknesses"),
                        SortingItem::graded("Tech innovation", "opportunities"),
                        SortingItem::graded("Changing regulations", "threats"),
                    ],
                    "Excellent! All cards are in the right place. You understand SWOT \
                     analysis!",
                    "Try again or review your placements!",
                )
                .expect("swot activity is valid"),
            ),
        ),
        Section::new(
            sid("reflection"),
            "Mini-Reflection",
            SectionBody::FreeResponse {
                intro: "Reflect on what you've learned and commit to your next steps."
                    .to_owned(),
                fields: vec![field("Reflection", "", true)],
                feedback: "Validation is an ongoing process. Keep talking to customers and \
                           refining your idea."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("quiz"),
            "Quiz",
            SectionBody::Quiz(
                Quiz::new(vec![
                    question(
                        "Where do the best business ideas usually come from?",
                        &[
                            "Waiting for inspiration",
                            "Spotting real problems people have",
                            "Copying competitors",
                            "Pure luck",
                        ],
                        1,
                    ),
                    question(
                        "What is the first step in validating a business idea?",
                        &[
                            "Build the full product",
                            "Design a logo",
                            "Talk to potential customers",
                            "Raise funding",
                        ],
                        2,
                    ),
                    question(
                        "In a monopoly market structure...",
                        &[
                            "Many companies compete freely",
                            "A single company dominates the market",
                            "A few giants share the market",
                            "Nobody competes",
                        ],
                        1,
                    ),
                    question(
                        "In a SWOT analysis, \"aggressive competitors\" belongs under...",
                        &["Strengths", "Opportunities", "Threats", "Weaknesses"],
                        2,
                    ),
                    question(
                        "Why start with a mind map instead of a business plan?",
                        &[
                            "Investors require one",
                            "It replaces customer research",
                            "It is faster and shows connections",
                            "Plans cannot be changed later",
                        ],
                        2,
                    ),
                ])
                .expect("week 1 lesson 2 quiz is valid"),
            ),
        ),
    ];

    Lesson::new(
        key(1, 2),
        "Business vs Entrepreneurship",
        "Understand the key differences between traditional business and entrepreneurship.",
        45,
        sections,
        CompletionRule::SectionsVisited,
    )
    .expect("week 1 lesson 2 is valid")
}

fn week2_lesson1() -> Lesson {
    let sections = vec![
        Section::new(
            sid("introduction"),
            "Introduction to Branding",
            SectionBody::InfoCards {
                intro: "A brand is more than just a logo or a name; it's the complete \
                        experience that customers have with your company. Let's explore how \
                        some of the world's most successful brands have built their \
                        identities."
                    .to_owned(),
                cards: vec![
                    InfoCard {
                        label: "Nike".to_owned(),
                        body: "Inspiration and innovation for every athlete in the world."
                            .to_owned(),
                        example: "Bold black and white contrast, the \"Swoosh\", \"Just Do \
                                  It\", celebrity athlete endorsements."
                            .to_owned(),
                    },
                    InfoCard {
                        label: "Apple".to_owned(),
                        body: "Think Different. Innovation that's beautiful and intuitive."
                            .to_owned(),
                        example: "Minimalist design, clean white spaces, premium \
                                  positioning, innovative technology focus."
                            .to_owned(),
                    },
                    InfoCard {
                        label: "Red Bull".to_owned(),
                        body: "Energy and excitement for an active lifestyle.".to_owned(),
                        example: "Extreme sports sponsorship, content-driven marketing, \
                                  \"Gives You Wings\"."
                            .to_owned(),
                    },
                ],
                followup: None,
            },
        ),
        Section::new(
            sid("brand-match"),
            "Brand Match Quiz",
            SectionBody::Sorting(
                SortingActivity::new(
                    "Match each brand with its core emotion or value. Drag and drop the \
                     brands to their corresponding emotions.",
                    vec![
                        SortingBucket::new("aspiration", "Aspiration"),
                        SortingBucket::new("innovation", "Innovation"),
                        SortingBucket::new("excitement", "Excitement"),
                        SortingBucket::new("simplicity", "Simplicity"),
                    ],
                    vec![
                        SortingItem::graded("Nike", "aspiration"),
                        SortingItem::graded("Apple", "innovation"),
                        SortingItem::graded("Red Bull", "excitement"),
                        SortingItem::graded("IKEA", "simplicity"),
                    ],
                    "You matched every brand to its core emotion!",
                    "Review the brand stories and try again!",
                )
                .expect("brand match activity is valid"),
            ),
        ),
        Section::new(
            sid("promise-checker"),
            "Brand Promise Analysis",
            SectionBody::FreeResponse {
                intro: "Enter a company name and analyze its brand promise. Compare your \
                        understanding with real-world examples."
                    .to_owned(),
                fields: vec![
                    field("Company Name", "Enter a company name...", false),
                    field(
                        "Brand Promise",
                        "What do you think this company promises to its customers?",
                        true,
                    ),
                ],
                feedback: "A clear promise is the heart of a brand. Strong brands repeat it \
                           in everything they do."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("logo-challenge"),
            "Logo Design Challenge",
            SectionBody::FreeResponse {
                intro: "Choose a famous logo and describe how you would change it to target \
                        a different audience or convey a new brand emotion. (For example, \
                        how would you change the Apple logo to appeal to children?)"
                    .to_owned(),
                fields: vec![field("Your redesign", "Describe your logo change...", true)],
                feedback: "Small visual changes shift how a whole brand feels. That's the \
                           power of design."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("archetype-wheel"),
            "Brand Archetype Wheel",
            SectionBody::ArchetypeWheel {
                prompt: "Select a brand archetype and explain how it fits a company you \
                         admire."
                    .to_owned(),
                archetypes: vec![
                    "The Hero".to_owned(),
                    "The Outlaw".to_owned(),
                    "The Creator".to_owned(),
                    "The Sage".to_owned(),
                    "The Innocent".to_owned(),
                    "The Explorer".to_owned(),
                ],
            },
        ),
        Section::new(
            sid("quiz"),
            "Final Quiz",
            SectionBody::Quiz(
                Quiz::new(vec![
                    question(
                        "What is a brand?",
                        &[
                            "A logo and a name",
                            "The complete experience customers have with a company",
                            "A product line",
                            "An advertising budget",
                        ],
                        1,
                    ),
                    question(
                        "Nike's brand promise centers on...",
                        &[
                            "Low prices",
                            "Inspiration for every athlete",
                            "Fast shipping",
                            "Exclusive memberships",
                        ],
                        1,
                    ),
                    question(
                        "Which brand is matched with \"Simplicity\"?",
                        &["Red Bull", "Apple", "IKEA", "Nike"],
                        2,
                    ),
                ])
                .expect("week 2 lesson 1 quiz is valid"),
            ),
        ),
    ];

    Lesson::new(
        key(2, 1),
        "What Is a Brand?",
        "Explore the fundamentals of branding through interactive activities and \
         real-world examples.",
        60,
        sections,
        CompletionRule::SectionsVisited,
    )
    .expect("week 2 lesson 1 is valid")
}

fn week2_lesson2() -> Lesson {
    let sections = vec![
        Section::new(
            sid("value"),
            "Marketing as Value Delivery",
            SectionBody::Reading {
                paragraphs: vec![
                    "Marketing is not just advertising: it is the delivery of perceived \
                     value. People don't buy products, they buy what products mean to them. \
                     Great brands engineer that meaning deliberately."
                        .to_owned(),
                ],
                bullets: Vec::new(),
                quote: None,
            },
        ),
        Section::new(
            sid("framework"),
            "Foundational Questions",
            SectionBody::FreeResponse {
                intro: "Answer the four foundational marketing questions for a brand you \
                        want to build. Nike's answers: athletes and aspirational performers; \
                        performance wear; endorsed by champions, it symbolizes achievement; \
                        emotional storytelling and athlete partnerships."
                    .to_owned(),
                fields: vec![
                    field("Who is our client?", "", false),
                    field("What are we selling?", "", false),
                    field("Why does it matter to them?", "", true),
                    field("How will they find out about it?", "", true),
                ],
                feedback: "If you can answer these four questions clearly, you already have \
                           a marketing strategy."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("pricing"),
            "Psychology of Pricing",
            SectionBody::InfoCards {
                intro: "Price is a message. Explore how these strategies shape what \
                        customers believe about a product:"
                    .to_owned(),
                cards: vec![
                    InfoCard {
                        label: "Prestige Pricing".to_owned(),
                        body: "High price signals high value. Used by Rolex, Apple."
                            .to_owned(),
                        example: "Apple iPhone Pro, Rolex watches".to_owned(),
                    },
                    InfoCard {
                        label: "Exclusivity & Rarity".to_owned(),
                        body: "Limited editions create desire and urgency.".to_owned(),
                        example: "Supreme drops, Yeezy sneakers".to_owned(),
                    },
                    InfoCard {
                        label: "Discount Perception".to_owned(),
                        body: "Sales can boost volume but may cheapen the brand.".to_owned(),
                        example: "Black Friday deals, outlet stores".to_owned(),
                    },
                    InfoCard {
                        label: "Emotional Value".to_owned(),
                        body: "People pay for meaning, not just features.".to_owned(),
                        example: "Charity:Water, TOMS shoes".to_owned(),
                    },
                ],
                followup: Some(field(
                    "Which pricing strategy fits your brand, and why?",
                    "",
                    true,
                )),
            },
        ),
        Section::new(
            sid("pestle"),
            "PESTLE Analysis",
            SectionBody::FreeResponse {
                intro: "Pick a country you might launch in and note one factor for each \
                        PESTLE dimension."
                    .to_owned(),
                fields: vec![
                    field("Political", "", false),
                    field("Economic", "", false),
                    field("Social", "", false),
                    field("Technological", "", false),
                    field("Legal", "", false),
                    field("Environmental", "", false),
                ],
                feedback: "Context beats instinct. PESTLE keeps launches grounded in the \
                           real world."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("place"),
            "Place & Distribution",
            SectionBody::InfoCards {
                intro: "Where customers meet your product changes what it means to them:"
                    .to_owned(),
                cards: vec![
                    InfoCard {
                        label: "Physical".to_owned(),
                        body: "Retail stores, pop-ups, flagship locations.".to_owned(),
                        example: "Apple Store, Supreme, Nike Town".to_owned(),
                    },
                    InfoCard {
                        label: "Digital".to_owned(),
                        body: "E-commerce, apps, digital-first brands.".to_owned(),
                        example: "Shein, Amazon, Gymshark".to_owned(),
                    },
                    InfoCard {
                        label: "Hybrid".to_owned(),
                        body: "Combines physical and digital for reach and experience."
                            .to_owned(),
                        example: "Warby Parker, Glossier".to_owned(),
                    },
                ],
                followup: Some(field(
                    "Which channel would you launch with, and why?",
                    "",
                    true,
                )),
            },
        ),
        Section::new(
            sid("promotion"),
            "Transition to Promotion",
            SectionBody::FreeResponse {
                intro: "Promotion is where your brand speaks out loud.".to_owned(),
                fields: vec![
                    field("How does promotion reflect your brand?", "", true),
                    field(
                        "Can promotion be emotional instead of informational?",
                        "",
                        true,
                    ),
                ],
                feedback: "The best promotion doesn't sell a product, it tells the brand's \
                           story."
                    .to_owned(),
            },
        ),
        Section::new(
            sid("takeaway"),
            "Takeaway",
            SectionBody::Reading {
                paragraphs: vec![
                    "Marketing is the bridge between what you make and why anyone cares. \
                     Price, place, and promotion all carry your brand promise; keep them \
                     telling the same story."
                        .to_owned(),
                ],
                bullets: Vec::new(),
                quote: None,
            },
        ),
    ];

    Lesson::new(
        key(2, 2),
        "Building Your Brand Identity",
        "Learn how to create a compelling brand identity that resonates with your target \
         audience.",
        60,
        sections,
        CompletionRule::SectionsVisited,
    )
    .expect("week 2 lesson 2 is valid")
}

fn week3_lesson1() -> Lesson {
    let sections = vec![
        Section::new(
            sid("agile"),
            "What Is Agile Project Management?",
            SectionBody::InfoCards {
                intro: "The Agile Manifesto values four things over their traditional \
                        counterparts. Tap a principle to see why it matters:"
                    .to_owned(),
                cards: vec![
                    InfoCard {
                        label: "Individuals and Interactions".to_owned(),
                        body: "Over processes and tools".to_owned(),
                        example: "While tools and processes are important, the focus should \
                                  be on people and how they work together."
                            .to_owned(),
                    },
                    InfoCard {
                        label: "Working Software".to_owned(),
                        body: "Over comprehensive documentation".to_owned(),
                        example: "Delivering functional software that meets user needs is \
                                  more valuable than extensive documentation."
                            .to_owned(),
                    },
                    InfoCard {
                        label: "Customer Collaboration".to_owned(),
                        body: "Over contract negotiation".to_owned(),
                        example: "Building relationships with customers and adapting to \
                                  their needs is more important than rigid contracts."
                            .to_owned(),
                    },
                    InfoCard {
                        label: "Responding to Change".to_owned(),
                        body: "Over following a plan".to_owned(),
                        example: "Being able to adapt to changing requirements is more \
                                  valuable than strictly following a fixed plan."
                            .to_owned(),
                    },
                ],
                followup: None,
            },
        ),
        Section::new(
            sid("gantt"),
            "Gantt Charts: Visualizing the Big Picture",
            SectionBody::GanttBuilder,
        ),
        Section::new(
            sid("risk"),
            "Risk Management Essentials",
            SectionBody::RiskMatrix,
        ),
        Section::new(
            sid("register"),
            "Risk Register Activity",
            SectionBody::RiskRegister,
        ),
        Section::new(
            sid("quiz"),
            "Ultimate Agile Quiz",
            SectionBody::Quiz(
                Quiz::new(vec![
                    question(
                        "Which of the following is NOT a core value of the Agile Manifesto?",
                        &[
                            "Individuals and interactions over processes and tools",
                            "Comprehensive documentation over working software",
                            "Customer collaboration over contract negotiation",
                            "Responding to change over following a plan",
                        ],
                        1,
                    ),
                    question(
                        "What is the primary purpose of a Gantt chart?",
                        &[
                            "To visualize project timelines and dependencies",
                            "To track project risks",
                            "To manage team communication",
                            "To estimate project costs",
                        ],
                        0,
                    ),
                    question(
                        "In risk management, which risks should be prioritized first?",
                        &[
                            "Low probability, low impact",
                            "High probability, high impact",
                            "Low probability, high impact",
                            "High probability, low impact",
                        ],
                        1,
                    ),
                    question(
                        "Which Agile role is responsible for maximizing the value of the \
                         product?",
                        &[
                            "Scrum Master",
                            "Product Owner",
                            "Development Team",
                            "Stakeholder",
                        ],
                        1,
                    ),
                    question(
                        "What is a sprint in Agile methodology?",
                        &[
                            "A short, time-boxed period to complete a set of work",
                            "A meeting to review project risks",
                            "A tool for visualizing project timelines",
                            "A document outlining project requirements",
                        ],
                        0,
                    ),
                ])
                .expect("week 3 lesson 1 quiz is valid"),
            ),
        ),
    ];

    Lesson::new(
        key(3, 1),
        "Agile Basics",
        "Learn the basics of agile methodology and how to apply it to your project.",
        60,
        sections,
        CompletionRule::QuizPass { pass_percent: 80 },
    )
    .expect("week 3 lesson 1 is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompletionRule;

    #[test]
    fn standard_catalog_has_three_weeks_and_five_lessons() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.weeks().len(), 3);
        assert_eq!(catalog.lesson_keys().len(), 5);
        assert_eq!(catalog.week(1).unwrap().lessons().len(), 2);
        assert_eq!(catalog.week(2).unwrap().lessons().len(), 2);
        assert_eq!(catalog.week(3).unwrap().lessons().len(), 1);
    }

    #[test]
    fn every_lesson_ends_in_a_capstone() {
        let catalog = Catalog::standard();
        for key in catalog.lesson_keys() {
            let lesson = catalog.lesson(key).unwrap();
            assert_eq!(lesson.tracked_count(), lesson.sections().len() - 1, "{key}");
        }
    }

    #[test]
    fn week3_completes_by_quiz() {
        let catalog = Catalog::standard();
        let lesson = catalog.lesson(LessonKey::new(3, 1).unwrap()).unwrap();
        assert_eq!(
            lesson.completion(),
            CompletionRule::QuizPass { pass_percent: 80 }
        );
        assert_eq!(lesson.quiz().unwrap().len(), 5);
    }

    #[test]
    fn lesson_lookup_by_key() {
        let catalog = Catalog::standard();
        let key = LessonKey::new(1, 2).unwrap();
        assert_eq!(catalog.lesson(key).unwrap().title(), "Business vs Entrepreneurship");
        assert!(catalog.lesson(LessonKey::new(4, 1).unwrap()).is_none());
    }
}
