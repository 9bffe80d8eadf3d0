use approx::assert_relative_eq;
use gold_price::GoldError;
use gold_price::core::{CurrencyContext, Language, TOMAN_PER_USD};
use gold_price::pricing::{
    DerivedPrice, MemoryFormSurface, OutputTarget, PriceField, PriceInputs, PricingConfig,
    PricingEngine, compute,
};

fn persian_engine() -> PricingEngine<MemoryFormSurface> {
    PricingEngine::attach(
        MemoryFormSurface::default(),
        PricingConfig::default(),
        Language::Fa,
    )
    .expect("pricing engine init")
}

#[test]
fn attach_writes_default_inputs_and_clears_outputs() {
    let engine = persian_engine();
    let surface = engine.surface();

    assert_eq!(surface.field_text(PriceField::UnitPrice), Some("۷,۱۸۹,۰۰۰"));
    assert_eq!(surface.field_text(PriceField::Weight), Some(""));
    assert_eq!(surface.field_text(PriceField::WagePercent), Some("۱۸"));
    assert_eq!(surface.field_text(PriceField::ProfitPercent), Some("۷"));

    for target in OutputTarget::REQUIRED {
        assert_eq!(surface.output_text(target), Some("۰"), "{target:?}");
    }
    assert_eq!(surface.output_text(OutputTarget::WageBadge), Some("۱۸%"));
    assert_eq!(surface.output_text(OutputTarget::ProfitBadge), Some("۷%"));
}

#[test]
fn english_attach_seeds_dollar_price() {
    let engine = PricingEngine::attach(
        MemoryFormSurface::default(),
        PricingConfig::default(),
        Language::En,
    )
    .expect("pricing engine init");

    assert_eq!(engine.field_text(PriceField::UnitPrice), "79.38");
    assert_eq!(engine.field_text(PriceField::WagePercent), "18");
    assert!(engine.context().is_foreign());
}

#[test]
fn worked_example_in_base_currency() {
    let mut engine = persian_engine();
    let derived = engine.on_input(PriceField::Weight, "10");

    assert_relative_eq!(derived.gold_price, 71_890_000.0, max_relative = 1e-12);
    assert_relative_eq!(derived.wage_amount, 12_940_200.0, max_relative = 1e-12);
    assert_relative_eq!(derived.profit_amount, 5_938_114.0, max_relative = 1e-12);
    assert_relative_eq!(derived.tax_amount, 1_699_048.26, max_relative = 1e-12);
    assert_relative_eq!(derived.final_price, 92_467_362.26, max_relative = 1e-12);

    let surface = engine.surface();
    assert_eq!(surface.output_text(OutputTarget::GoldPrice), Some("۷۱,۸۹۰,۰۰۰"));
    assert_eq!(surface.output_text(OutputTarget::WageAmount), Some("۱۲,۹۴۰,۲۰۰"));
    assert_eq!(surface.output_text(OutputTarget::ProfitAmount), Some("۵,۹۳۸,۱۱۴"));
    assert_eq!(surface.output_text(OutputTarget::TaxAmount), Some("۱,۶۹۹,۰۴۸"));
    assert_eq!(surface.output_text(OutputTarget::FinalPrice), Some("۹۲,۴۶۷,۳۶۲"));
}

#[test]
fn zero_weight_clears_outputs_regardless_of_other_fields() {
    let mut engine = persian_engine();
    engine.on_input(PriceField::Weight, "10");
    engine.on_input(PriceField::WagePercent, "40");

    let derived = engine.on_input(PriceField::Weight, "0");
    assert_eq!(derived, DerivedPrice::ZERO);
    for target in OutputTarget::REQUIRED {
        assert_eq!(engine.surface().output_text(target), Some("۰"));
    }
    assert_eq!(
        engine.surface().output_text(OutputTarget::WageBadge),
        Some("۴۰%")
    );
}

#[test]
fn input_is_reformatted_live() {
    let mut engine = persian_engine();

    engine.on_input(PriceField::UnitPrice, "72,000,00abc");
    assert_eq!(engine.field_text(PriceField::UnitPrice), "۷,۲۰۰,۰۰۰");

    engine.on_input(PriceField::Weight, "۱۲٫۵");
    assert_eq!(engine.field_text(PriceField::Weight), "۱۲.۵");

    engine.on_input(PriceField::Weight, "1234");
    assert_eq!(engine.field_text(PriceField::Weight), "۱,۲۳۴");

    engine.on_input(PriceField::WagePercent, "");
    assert_eq!(engine.field_text(PriceField::WagePercent), "۰");
    assert_eq!(
        engine.surface().field_text(PriceField::WagePercent),
        Some("۰")
    );
}

#[test]
fn currency_change_resets_price_and_keeps_other_fields() {
    let mut engine = persian_engine();
    engine.on_input(PriceField::UnitPrice, "8000000");
    engine.on_input(PriceField::Weight, "2");
    engine.on_input(PriceField::WagePercent, "20");

    let derived = engine.on_currency_context_change(Language::En);

    assert_eq!(engine.field_text(PriceField::UnitPrice), "79.38");
    assert_eq!(engine.field_text(PriceField::Weight), "2");
    assert_eq!(engine.field_text(PriceField::WagePercent), "20");
    assert_eq!(engine.field_text(PriceField::ProfitPercent), "7");

    let expected_gold = 79.38 * f64::from(TOMAN_PER_USD) * 2.0 / f64::from(TOMAN_PER_USD);
    assert_relative_eq!(derived.gold_price, expected_gold, max_relative = 1e-12);
    assert_eq!(
        engine.surface().output_text(OutputTarget::GoldPrice),
        Some("159")
    );

    engine.on_currency_context_change(Language::Fa);
    assert_eq!(engine.field_text(PriceField::UnitPrice), "۷,۱۸۹,۰۰۰");
    assert_eq!(engine.field_text(PriceField::Weight), "۲");
}

#[test]
fn blank_weight_survives_currency_change() {
    let mut engine = persian_engine();
    engine.on_currency_context_change(Language::En);
    assert_eq!(engine.field_text(PriceField::Weight), "");
    assert_eq!(engine.surface().output_text(OutputTarget::FinalPrice), Some("0"));
}

#[test]
fn missing_required_target_disables_attach() {
    let surface = MemoryFormSurface::default().without_output(OutputTarget::TaxAmount);
    let err = PricingEngine::attach(surface, PricingConfig::default(), Language::Fa)
        .err()
        .expect("attach must fail");
    match err {
        GoldError::MissingIntegrationPoint { component, target } => {
            assert_eq!(component, "pricing");
            assert_eq!(target, "tax-amount");
        }
        other => panic!("unexpected error: {other}"),
    }

    let surface = MemoryFormSurface::default().without_field(PriceField::Weight);
    assert!(PricingEngine::attach(surface, PricingConfig::default(), Language::Fa).is_err());
}

#[test]
fn badges_are_optional() {
    let surface = MemoryFormSurface::default()
        .without_output(OutputTarget::WageBadge)
        .without_output(OutputTarget::ProfitBadge);
    let mut engine =
        PricingEngine::attach(surface, PricingConfig::default(), Language::En).expect("attach");

    engine.on_input(PriceField::Weight, "1");
    assert_eq!(engine.surface().output_text(OutputTarget::WageBadge), None);
    assert_eq!(engine.surface().output_text(OutputTarget::GoldPrice), Some("79"));
}

#[test]
fn configured_tax_rate_is_used() {
    let config = PricingConfig {
        tax_rate: 0.1,
        ..PricingConfig::default()
    };
    let mut engine =
        PricingEngine::attach(MemoryFormSurface::default(), config, Language::Fa).expect("attach");
    engine.on_input(PriceField::UnitPrice, "1000");
    let derived = engine.on_input(PriceField::Weight, "1");

    assert_relative_eq!(
        derived.tax_amount,
        (derived.wage_amount + derived.profit_amount) * 0.1,
        max_relative = 1e-12
    );
}

#[test]
fn invalid_config_is_rejected() {
    let config = PricingConfig {
        conversion_rate: 0,
        ..PricingConfig::default()
    };
    assert!(PricingEngine::attach(MemoryFormSurface::default(), config, Language::Fa).is_err());
}

#[test]
fn compute_matches_engine_output() {
    let inputs = PriceInputs::parse("۷,۱۸۹,۰۰۰", "۱۰", "۱۸", "۷");
    let context = CurrencyContext::new(Language::Fa, TOMAN_PER_USD);
    let mut engine = persian_engine();
    assert_eq!(compute(&inputs, context), engine.on_input(PriceField::Weight, "10"));
}
