use super::*;

#[test]
fn greeting_matches_case_insensitively() {
    let verdict = RuleSet::launch_bot().classify("ПРИВЕТ");
    assert_eq!(verdict.reply, GREETING_REPLY);
    assert_eq!(verdict.rule, Some(0));
}

#[test]
fn greeting_wins_inside_a_longer_sentence() {
    let verdict = RuleSet::launch_bot().classify("привет, как дела?");
    assert_eq!(verdict.reply, GREETING_REPLY);
    assert_eq!(verdict.effect, None);
}

#[test]
fn first_listed_rule_wins_on_overlap() {
    // Greeting, lead request and price all present; greeting is listed first.
    let verdict = RuleSet::launch_bot().classify("Здравствуйте! Какая цена? Хочу оставить заявку");
    assert_eq!(verdict.reply, GREETING_REPLY);
    assert_eq!(verdict.effect, None);

    let verdict = RuleSet::launch_bot().classify("помоги узнать стоимость");
    assert_eq!(verdict.reply, HELP_REPLY);
}

#[test]
fn lead_request_matches_inflected_forms() {
    for text in ["хочу оставить заявку", "Заявка на звонок", "где ваши контакты?"] {
        let verdict = RuleSet::launch_bot().classify(text);
        assert_eq!(verdict.reply, LEAD_PROMPT_REPLY, "input {text:?}");
        assert_eq!(verdict.effect, Some(RuleEffect::BeginLeadCapture));
    }
}

#[test]
fn lead_request_beats_price_when_listed_first() {
    let verdict = RuleSet::launch_bot().classify("контакт и цена");
    assert_eq!(verdict.reply, LEAD_PROMPT_REPLY);
}

#[test]
fn price_question_matches() {
    let verdict = RuleSet::launch_bot().classify("Какая стоимость?");
    assert_eq!(verdict.reply, PRICE_REPLY);
    assert_eq!(verdict.rule, Some(3));
}

#[test]
fn unmatched_input_gets_fallback() {
    let verdict = RuleSet::launch_bot().classify("what is this?");
    assert_eq!(verdict, Verdict { reply: FALLBACK_REPLY, effect: None, rule: None });
}

#[test]
fn only_lead_rule_carries_an_effect() {
    let rules = RuleSet::launch_bot();
    let with_effect: Vec<usize> = rules
        .rules()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.effect.is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(with_effect, vec![2]);
}

#[test]
fn custom_rule_set_respects_its_own_order() {
    let rules = RuleSet::new(
        vec![
            Rule { keywords: &["b"], reply: "second-listed-b", effect: None },
            Rule { keywords: &["a"], reply: "a", effect: None },
        ],
        "none",
    );
    assert_eq!(rules.classify("a b").reply, "second-listed-b");
    assert_eq!(rules.classify("zzz").reply, "none");
}
