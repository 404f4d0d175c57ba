//! Canned-response keyword rules.
//!
//! DESIGN
//! ======
//! Rules are an ordered list evaluated top-down over the lower-cased input;
//! the first rule with any keyword contained in the input wins. Keyword
//! groups overlap on purpose (a greeting that also asks for a price gets the
//! greeting), so list order is the only precedence there is.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

/// Side effect attached to a rule, applied when its reply is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    /// Show the lead form.
    BeginLeadCapture,
}

/// One keyword group and the reply it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
    pub effect: Option<RuleEffect>,
}

impl Rule {
    /// Whether any keyword occurs in the already lower-cased `input`.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.keywords.iter().any(|k| input.contains(k))
    }
}

/// Reply chosen for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub reply: &'static str,
    pub effect: Option<RuleEffect>,
    /// Index of the matching rule, `None` when the fallback was used.
    pub rule: Option<usize>,
}

pub const GREETING_REPLY: &str = "🎉 Рад тебя видеть! Чем могу помочь?";
pub const HELP_REPLY: &str = "💡 Я могу помочь тебе с вопросами о наших услугах. Хочешь оставить заявку?";
pub const LEAD_PROMPT_REPLY: &str = "📝 Отлично! Заполни форму ниже, и я передам твои данные менеджеру!";
pub const PRICE_REPLY: &str = "💰 Цены начинаются от 1000₽. Оставь заявку для точного расчета!";
pub const FALLBACK_REPLY: &str = "🤔 Интересный вопрос! Могу предложить оставить заявку для связи с менеджером.";

/// Ordered rules plus the fallback reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<Rule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// The launch bot's rules: greeting, help, lead request, pricing.
    #[must_use]
    pub fn launch_bot() -> Self {
        Self::new(
            vec![
                Rule { keywords: &["привет", "здравствуй"], reply: GREETING_REPLY, effect: None },
                Rule { keywords: &["помощь", "помоги"], reply: HELP_REPLY, effect: None },
                Rule {
                    keywords: &["заявк", "контакт"],
                    reply: LEAD_PROMPT_REPLY,
                    effect: Some(RuleEffect::BeginLeadCapture),
                },
                Rule { keywords: &["цена", "стоимость"], reply: PRICE_REPLY, effect: None },
            ],
            FALLBACK_REPLY,
        )
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Pick the reply for `text`: first matching rule, else the fallback.
    #[must_use]
    pub fn classify(&self, text: &str) -> Verdict {
        let input = text.to_lowercase();
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(&input))
            .map_or(Verdict { reply: self.fallback, effect: None, rule: None }, |(index, rule)| Verdict {
                reply: rule.reply,
                effect: rule.effect,
                rule: Some(index),
            })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::launch_bot()
    }
}
