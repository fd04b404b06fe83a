//! Filler text: lorem ipsum and curated readable paragraphs

use std::str::FromStr;

use super::catalog::Field;
use super::context::GeneratorContext;

/// Unit of lorem text requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoremKind {
    #[default]
    Words,
    Sentences,
    Paragraphs,
}

impl FromStr for LoremKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "words" => Ok(Self::Words),
            "sentences" => Ok(Self::Sentences),
            "paragraphs" => Ok(Self::Paragraphs),
            other => Err(format!("Unknown lorem type: {}", other)),
        }
    }
}

/// Topic of the curated paragraph set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadableContext {
    #[default]
    General,
    Technology,
    Business,
    Design,
}

impl ReadableContext {
    /// Unknown or absent names fall back to `General`
    pub fn from_query(name: Option<&str>) -> Self {
        match name.map(str::to_lowercase).as_deref() {
            Some("technology") => Self::Technology,
            Some("business") => Self::Business,
            Some("design") => Self::Design,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technology => "technology",
            Self::Business => "business",
            Self::Design => "design",
        }
    }

    pub fn paragraphs(&self) -> &'static [&'static str] {
        match self {
            Self::General => &[
                "Collaboration is key to successful project delivery. Utilizing shared workspaces and clear communication channels ensures that all team members are aligned and working towards common goals.",
                "User feedback provides invaluable insights for product improvement. Actively soliciting and analyzing user comments helps prioritize features and fix issues, leading to a more refined and user-centric product.",
                "Effective time management allows individuals and teams to prioritize tasks and achieve objectives efficiently. Breaking down large goals into smaller, manageable steps can improve focus and productivity.",
                "Continuous learning is essential in today's rapidly changing environment. Staying updated with new skills and knowledge helps maintain relevance and fosters personal and professional growth.",
            ],
            Self::Technology => &[
                "Explore the possibilities of modern web development with intuitive user interfaces and seamless backend integrations. Our platform provides the tools you need to build responsive and engaging applications efficiently.",
                "Scalable cloud architecture allows applications to handle growth gracefully. Designing systems that can adapt to increasing loads ensures reliability and maintains performance as user bases expand.",
                "API design principles emphasize consistency, clarity, and predictability. Well-designed APIs are easier for developers to understand, integrate, and maintain, fostering a positive developer experience.",
                "DevOps practices streamline the software development lifecycle by automating build, test, and deployment processes. This leads to faster release cycles and improved collaboration between development and operations teams.",
            ],
            Self::Business => &[
                "Understanding market trends is crucial for strategic decision-making. Analyzing competitor actions and consumer behavior helps businesses identify opportunities and navigate potential challenges effectively.",
                "Financial planning provides a roadmap for achieving business objectives. Budgeting, forecasting, and managing cash flow are essential components of sustainable financial health.",
                "Building strong customer relationships drives loyalty and long-term value. Providing excellent service and personalized experiences can differentiate a business in a competitive marketplace.",
                "Effective marketing strategies connect businesses with their target audience. Utilizing a mix of digital channels and traditional methods helps build brand awareness and generate qualified leads.",
            ],
            Self::Design => &[
                "Data visualization helps in understanding complex datasets by presenting information in a graphical format. Effective charts and graphs can reveal patterns, trends, and outliers that might otherwise go unnoticed.",
                "Accessibility should be a primary consideration in design and development. Creating products that are usable by everyone, regardless of ability, expands reach and improves the overall user experience.",
                "User interface (UI) design focuses on the visual presentation and interactivity of a product. Consistent layouts, clear typography, and intuitive navigation contribute to a positive user perception.",
                "User experience (UX) design encompasses all aspects of the end-user's interaction with the company, its services, and products. It aims to create seamless, enjoyable, and efficient interactions.",
            ],
        }
    }
}

impl GeneratorContext {
    pub fn lorem_word(&mut self) -> &'static str {
        self.pick(Field::LoremWord)
    }

    pub fn lorem_words(&mut self, count: usize) -> String {
        let words: Vec<&str> = (0..count).map(|_| self.lorem_word()).collect();
        words.join(" ")
    }

    pub fn lorem_sentence(&mut self) -> String {
        let len = self.int(3..=10) as usize;
        let mut sentence = self.lorem_words(len);
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    pub fn lorem_sentences(&mut self, count: usize) -> String {
        let sentences: Vec<String> = (0..count).map(|_| self.lorem_sentence()).collect();
        sentences.join(" ")
    }

    pub fn lorem_paragraph(&mut self) -> String {
        let len = self.int(3..=6) as usize;
        self.lorem_sentences(len)
    }

    pub fn lorem_paragraphs(&mut self, count: usize) -> String {
        let paragraphs: Vec<String> = (0..count).map(|_| self.lorem_paragraph()).collect();
        paragraphs.join("\n")
    }

    pub fn lorem(&mut self, kind: LoremKind, count: usize) -> String {
        match kind {
            LoremKind::Words => self.lorem_words(count),
            LoremKind::Sentences => self.lorem_sentences(count),
            LoremKind::Paragraphs => self.lorem_paragraphs(count),
        }
    }

    /// One curated paragraph for `context`
    pub fn readable_paragraph(&mut self, context: ReadableContext) -> &'static str {
        self.choose(context.paragraphs())
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::Locale;

    #[test]
    fn test_word_count() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 555);

        assert_eq!(ctx.lorem(LoremKind::Words, 5).split(' ').count(), 5);
        assert_eq!(ctx.lorem(LoremKind::Words, 0), "");
    }

    #[test]
    fn test_sentences_are_capitalized() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 1);
        let sentence = ctx.lorem_sentence();

        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().unwrap().is_ascii_uppercase());
    }

    #[test]
    fn test_paragraphs_are_line_separated() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 2);

        assert_eq!(ctx.lorem(LoremKind::Paragraphs, 3).lines().count(), 3);
    }

    #[test]
    fn test_lorem_kind_parsing() {
        assert_eq!("Sentences".parse::<LoremKind>().unwrap(), LoremKind::Sentences);
        assert!("chapters".parse::<LoremKind>().is_err());
    }

    #[test]
    fn test_readable_context_fallback() {
        assert_eq!(ReadableContext::from_query(None), ReadableContext::General);
        assert_eq!(
            ReadableContext::from_query(Some("TECHNOLOGY")),
            ReadableContext::Technology
        );
        assert_eq!(
            ReadableContext::from_query(Some("cooking")),
            ReadableContext::General
        );
    }

    #[test]
    fn test_every_context_has_four_paragraphs() {
        for context in [
            ReadableContext::General,
            ReadableContext::Technology,
            ReadableContext::Business,
            ReadableContext::Design,
        ] {
            assert_eq!(context.paragraphs().len(), 4);
        }
    }

    #[test]
    fn test_seeded_paragraph_selection_repeats() {
        let mut a = GeneratorContext::seeded(Locale::En, 31);
        let mut b = GeneratorContext::seeded(Locale::En, 31);

        for _ in 0..4 {
            let left = a.readable_paragraph(ReadableContext::Business);
            assert_eq!(left, b.readable_paragraph(ReadableContext::Business));
            assert!(ReadableContext::Business.paragraphs().contains(&left));
        }
    }
}
