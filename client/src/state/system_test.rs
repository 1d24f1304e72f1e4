use super::*;

#[test]
fn default_selection_is_power() {
    let state = SelectorState::default();
    assert_eq!(state.active(), SystemId::Power);
}

#[test]
fn parse_round_trips_known_ids() {
    for id in SystemId::ALL {
        assert_eq!(SystemId::parse(id.as_str()), Some(id));
    }
}

#[test]
fn parse_rejects_unknown_and_case_variants() {
    assert_eq!(SystemId::parse("solar"), None);
    assert_eq!(SystemId::parse("WIFI"), None);
    assert_eq!(SystemId::parse(""), None);
}

#[test]
fn select_known_id_highlights_it() {
    let mut state = SelectorState::default();
    assert!(state.select("security"));
    assert_eq!(state.active(), SystemId::Security);
    assert_eq!(
        state.button_class(SystemId::Security),
        "system-btn p-4 rounded-lg border-2 bg-green-100 border-current text-green-500 transition-all hover:scale-105"
    );
}

#[test]
fn select_unknown_id_leaves_every_button_unchanged() {
    let mut state = SelectorState::default();
    state.select("wifi");
    let before: Vec<String> = SystemId::ALL.iter().map(|id| state.button_class(*id)).collect();

    for unknown in ["", "solar", "Power", "smart-home"] {
        assert!(!state.select(unknown));
        let after: Vec<String> = SystemId::ALL.iter().map(|id| state.button_class(*id)).collect();
        assert_eq!(before, after, "classes changed for {unknown:?}");
    }
    assert_eq!(state.active(), SystemId::Wifi);
}

#[test]
fn exactly_one_button_is_highlighted() {
    let mut state = SelectorState::default();
    for id in SystemId::ALL {
        state.select(id.as_str());
        let highlighted = SystemId::ALL
            .iter()
            .filter(|other| state.button_class(**other) != DEFAULT_BUTTON_CLASS)
            .count();
        assert_eq!(highlighted, 1);
    }
}

#[test]
fn icon_follows_selection() {
    let mut state = SelectorState::default();
    state.select("smart");
    assert_eq!(state.icon_class(), "w-6 h-6 text-purple-500");
    assert!(state.icon_markup().contains(r#"data-lucide="home""#));
    assert_eq!(state.active().info().label, "Розумний дім");
}

#[test]
fn reset_returns_to_default() {
    let mut state = SelectorState::default();
    state.select("wifi");
    state.reset();
    assert_eq!(state.active(), SystemId::Power);
}
