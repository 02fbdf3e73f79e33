use super::domain::{
    likert_options, AnswerOption, PsychometricCategory, Question, QuestionTag, Section,
    TechnicalKind, WiscarDimension,
};

/// Fixed, ordered question lists for every section of the assessment.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    psychometric: Vec<Question>,
    technical: Vec<Question>,
    wiscar: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            psychometric: psychometric_questions(),
            technical: technical_questions(),
            wiscar: wiscar_questions(),
        }
    }

    pub fn questions(&self, section: Section) -> &[Question] {
        match section {
            Section::Psychometric => &self.psychometric,
            Section::Technical => &self.technical,
            Section::Wiscar => &self.wiscar,
        }
    }

    pub fn find(&self, question_id: &str) -> Option<&Question> {
        Section::ordered()
            .into_iter()
            .flat_map(|section| self.questions(section).iter())
            .find(|question| question.id == question_id)
    }

    pub fn len(&self) -> usize {
        self.psychometric.len() + self.technical.len() + self.wiscar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

fn likert(id: &'static str, text: &'static str, tag: QuestionTag) -> Question {
    Question {
        id,
        text,
        tag,
        options: likert_options(),
    }
}

fn psychometric(
    id: &'static str,
    text: &'static str,
    category: PsychometricCategory,
    construct: &'static str,
) -> Question {
    likert(
        id,
        text,
        QuestionTag::Psychometric {
            category,
            construct,
        },
    )
}

fn wiscar(id: &'static str, text: &'static str, dimension: WiscarDimension) -> Question {
    likert(id, text, QuestionTag::Wiscar { dimension })
}

fn technical(
    id: &'static str,
    text: &'static str,
    kind: TechnicalKind,
    options: Vec<AnswerOption>,
) -> Question {
    Question {
        id,
        text,
        tag: QuestionTag::Technical { kind },
        options,
    }
}

fn psychometric_questions() -> Vec<Question> {
    use PsychometricCategory::*;

    vec![
        psychometric(
            "p1",
            "I enjoy analyzing data to discover patterns and trends",
            Interest,
            "analytical_interest",
        ),
        psychometric(
            "p2",
            "I find market research and consumer behavior fascinating",
            Interest,
            "domain_interest",
        ),
        psychometric(
            "p3",
            "I am naturally curious about why people make certain choices",
            Personality,
            "openness",
        ),
        psychometric(
            "p4",
            "I prefer structured, systematic approaches to problem-solving",
            Personality,
            "conscientiousness",
        ),
        psychometric(
            "p5",
            "I persist through challenges even when progress is slow",
            Personality,
            "grit",
        ),
        psychometric(
            "p6",
            "I believe my abilities can be developed through hard work",
            Cognitive,
            "growth_mindset",
        ),
        psychometric(
            "p7",
            "I enjoy presenting findings and insights to others",
            Personality,
            "extraversion",
        ),
        psychometric(
            "p8",
            "Statistical analysis and numbers excite me",
            Interest,
            "quantitative_interest",
        ),
        psychometric(
            "p9",
            "I'm motivated by understanding complex problems",
            Motivation,
            "intrinsic_motivation",
        ),
        psychometric(
            "p10",
            "Career growth and advancement are important to me",
            Motivation,
            "extrinsic_motivation",
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    use TechnicalKind::*;

    vec![
        technical(
            "t1",
            "If a survey has a margin of error of ±3% with 95% confidence, what does this mean?",
            Prerequisite,
            vec![
                AnswerOption::new("a", "The survey is 95% accurate"),
                AnswerOption::correct(
                    "b",
                    "95% of the time, the true value is within 3% of the survey result",
                ),
                AnswerOption::new("c", "3% of respondents will give wrong answers"),
                AnswerOption::new("d", "The survey should be repeated 95 times"),
            ],
        ),
        technical(
            "t2",
            "In a data set: 2, 4, 6, 8, 10, 12, 14. What is the median?",
            Aptitude,
            vec![
                AnswerOption::new("a", "6"),
                AnswerOption::new("b", "7"),
                AnswerOption::correct("c", "8"),
                AnswerOption::new("d", "9"),
            ],
        ),
        technical(
            "t3",
            "Which sampling method would be BEST for studying customer satisfaction across different store locations?",
            Domain,
            vec![
                AnswerOption::new("a", "Simple random sampling"),
                AnswerOption::correct("b", "Stratified sampling"),
                AnswerOption::new("c", "Convenience sampling"),
                AnswerOption::new("d", "Snowball sampling"),
            ],
        ),
        technical(
            "t4",
            "What is the next number in this sequence: 2, 6, 14, 30, ?",
            Aptitude,
            vec![
                AnswerOption::new("a", "46"),
                AnswerOption::new("b", "54"),
                AnswerOption::correct("c", "62"),
                AnswerOption::new("d", "78"),
            ],
        ),
        technical(
            "t5",
            "Which Excel function would you use to count non-empty cells in a range?",
            Prerequisite,
            vec![
                AnswerOption::new("a", "COUNT()"),
                AnswerOption::correct("b", "COUNTA()"),
                AnswerOption::new("c", "SUM()"),
                AnswerOption::new("d", "AVERAGE()"),
            ],
        ),
        technical(
            "t6",
            "In market research, what is a 'focus group' primarily used for?",
            Domain,
            vec![
                AnswerOption::new("a", "Statistical analysis of large datasets"),
                AnswerOption::correct(
                    "b",
                    "Gathering qualitative insights through group discussions",
                ),
                AnswerOption::new("c", "Testing product pricing strategies"),
                AnswerOption::new("d", "Measuring brand awareness quantitatively"),
            ],
        ),
        technical(
            "t7",
            "If Product A has 25% market share and Product B has 15% market share, what's the ratio of A to B?",
            Aptitude,
            vec![
                AnswerOption::new("a", "1.5:1"),
                AnswerOption::correct("b", "1.67:1"),
                AnswerOption::new("c", "2:1"),
                AnswerOption::new("d", "2.5:1"),
            ],
        ),
        technical(
            "t8",
            "What is 'response bias' in survey research?",
            Domain,
            vec![
                AnswerOption::new("a", "When surveys take too long to complete"),
                AnswerOption::correct(
                    "b",
                    "When respondents give inaccurate or misleading answers",
                ),
                AnswerOption::new("c", "When not enough people respond to the survey"),
                AnswerOption::new("d", "When questions are poorly written"),
            ],
        ),
    ]
}

fn wiscar_questions() -> Vec<Question> {
    use WiscarDimension::*;

    vec![
        wiscar(
            "w1",
            "I am willing to invest significant time and effort to master market research skills",
            Will,
        ),
        wiscar(
            "w2",
            "I persist through difficult challenges even when others might give up",
            Will,
        ),
        wiscar(
            "i1",
            "I genuinely find market trends and consumer behavior fascinating",
            Interest,
        ),
        wiscar(
            "i2",
            "I actively seek out information about market research and analytics",
            Interest,
        ),
        wiscar(
            "s1",
            "I am comfortable working with spreadsheets and data analysis tools",
            Skill,
        ),
        wiscar(
            "s2",
            "I can effectively communicate complex findings to different audiences",
            Skill,
        ),
        wiscar(
            "c1",
            "I excel at identifying patterns and drawing logical conclusions from data",
            Cognitive,
        ),
        wiscar(
            "c2",
            "I can break down complex problems into manageable components",
            Cognitive,
        ),
        wiscar(
            "a1",
            "I actively seek feedback and use it to improve my performance",
            AbilityToLearn,
        ),
        wiscar(
            "a2",
            "I adapt quickly when learning new methods or technologies",
            AbilityToLearn,
        ),
        wiscar(
            "r1",
            "I understand the day-to-day responsibilities of a market research analyst",
            RealWorld,
        ),
        wiscar(
            "r2",
            "I have realistic expectations about career progression in market research",
            RealWorld,
        ),
    ]
}
