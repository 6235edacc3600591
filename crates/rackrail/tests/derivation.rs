//! Derivation engine tests: table values in, custom properties and rules out.

use rackrail::author::{fixed_rail_columns, row, uniform_offsets, uniform_rack_columns, viewport, with_slide};
use rackrail::{ContainerKind, GridConfig, VarNames, derive_all, derive_breakpoint, profile, stylesheet};

fn small_screen() -> GridConfig {
    let mut config = GridConfig {
        viewports: vec![viewport("sm", 375, 24)],
        ..Default::default()
    };
    config.rack_columns.insert("sm".into(), row(6, &["50%"]));
    config.rail_columns.insert("sm".into(), with_slide(Default::default(), 12));
    config.offsets.insert("sm".into(), row(0, &["0%", "auto"]));
    config
}

fn full_tables() -> GridConfig {
    let mut config = GridConfig {
        viewports: vec![viewport("sm", 375, 24), viewport("lg", 1440, 32)],
        ..Default::default()
    };
    for name in ["sm", "lg"] {
        config.rack_columns.insert(name.into(), uniform_rack_columns(12));
        config.rail_columns.insert(
            name.into(),
            with_slide(fixed_rail_columns(&[16.0, 20.0, 24.0, 28.0, 32.0, 36.0, 40.0, 44.0, 48.0, 52.0, 56.0]), 12),
        );
        config.offsets.insert(name.into(), uniform_offsets(12));
    }
    config
}

#[test]
fn test_small_screen_block() {
    let config = small_screen();
    let styles = derive_breakpoint(&config, &config.viewports[0]);

    insta::assert_snapshot!(
        rrcss::StyleSheet::new().with(styles.to_rule()).to_css().trim_end(),
        @r"
    @media (min-width: 23.4375rem) {
      :root {
        --tw-layout-padding: 1.5rem;
        --tw-layout-padding-total: 3rem;
        --tw-layout-max-width: 327px;
        --tw-layout-breakpoint: sm;
        --tw-rack-col-6: 50%;
        --tw-rail-col-12: 100%;
        --tw-offset-0: 0%;
      }
      .rack .col-6 {
        width: var(--tw-rack-col-6);
        flex-shrink: 0;
      }
      .rail .col-12 {
        width: var(--tw-rail-col-12);
        min-width: var(--tw-rail-col-12);
        flex-shrink: 0;
      }
      .rack .offset-0 {
        margin-left: var(--tw-offset-0);
      }
      .page-wrapper {
        max-width: var(--tw-layout-max-width);
      }
    }
    "
    );
}

#[test]
fn test_rack_values_round_trip_verbatim() {
    let config = profile("rack-rail").unwrap();
    let names = VarNames::new(&config.system.namespace);

    for styles in derive_all(&config) {
        for (n, value) in &config.rack_columns[&styles.breakpoint] {
            let property = names.column(ContainerKind::Rack, *n);
            let rule = styles.rule(&format!(".rack .col-{n}")).unwrap();
            assert_eq!(rule.declaration("width"), Some(format!("var({property})").as_str()));
            assert_eq!(styles.variable(&property), Some(value.as_str()));
        }
    }
}

#[test]
fn test_rail_slide_sets_width_and_min_width() {
    let config = full_tables();
    for styles in derive_all(&config) {
        let rule = styles.rule(".rail .col-12").unwrap();
        assert_eq!(rule.declaration("width"), Some("var(--tw-rail-col-12)"));
        assert_eq!(rule.declaration("min-width"), Some("var(--tw-rail-col-12)"));
        assert_eq!(styles.variable("--tw-rail-col-12"), Some("100%"));
    }
}

#[test]
fn test_removed_column_is_absent_only_where_removed() {
    let mut config = full_tables();
    config.rack_columns.get_mut("lg").unwrap().remove(&5);

    let blocks = derive_all(&config);
    let (sm, lg) = (&blocks[0], &blocks[1]);

    assert!(lg.rule(".rack .col-5").is_none());
    assert!(lg.variable("--tw-rack-col-5").is_none());
    assert!(sm.rule(".rack .col-5").is_some());
    for n in (1..=12).filter(|n| *n != 5) {
        assert!(lg.rule(&format!(".rack .col-{n}")).is_some(), "col-{n}");
    }
}

#[test]
fn test_auto_and_out_of_range_entries_are_skipped() {
    let mut config = small_screen();
    config.rack_columns.get_mut("sm").unwrap().insert(13, "100%".into());
    config.rack_columns.get_mut("sm").unwrap().insert(7, "auto".into());
    config.offsets.get_mut("sm").unwrap().insert(12, "100%".into());

    let styles = derive_breakpoint(&config, &config.viewports[0]);
    assert!(styles.rule(".rack .col-13").is_none());
    assert!(styles.rule(".rack .col-7").is_none());
    assert!(styles.rule(".rack .offset-1").is_none());
    assert!(styles.rule(".rack .offset-12").is_none());
    assert!(styles.rule(".rack .offset-0").is_some());
}

#[test]
fn test_blocks_follow_breakpoint_order() {
    let css = stylesheet(&full_tables()).to_css();
    let sm = css.find("@media (min-width: 23.4375rem)").unwrap();
    let lg = css.find("@media (min-width: 90rem)").unwrap();
    assert!(sm < lg);
}

#[test]
fn test_derivation_is_idempotent() {
    let config = profile("twlayout").unwrap();
    assert_eq!(stylesheet(&config).to_css(), stylesheet(&config).to_css());
    assert_eq!(derive_all(&config), derive_all(&config));
}

#[test]
fn test_namespace_is_configurable() {
    let mut config = small_screen();
    config.system.namespace = String::new();

    let styles = derive_breakpoint(&config, &config.viewports[0]);
    assert_eq!(styles.variable("--rack-col-6"), Some("50%"));
    assert_eq!(
        styles.rule(".rack .col-6").unwrap().declaration("width"),
        Some("var(--rack-col-6)")
    );
}

#[test]
fn test_base_styles_snapshot() {
    let css = rackrail::derive::base_styles(&GridConfig::default()).to_css();

    insta::assert_snapshot!(css.trim_end(), @r"
    :root {
      --tw-layout-padding: 1.5rem;
      --tw-layout-gap: 1rem;
    }

    .rack, .rail {
      display: flex;
      gap: var(--tw-layout-gap);
      padding-left: var(--tw-layout-padding);
      padding-right: var(--tw-layout-padding);
      width: 100%;
      box-sizing: border-box;
    }

    .rack {
      flex-wrap: wrap;
      align-items: stretch;
    }

    .rail {
      flex-wrap: nowrap;
      overflow-x: auto;
      scrollbar-width: none;
      -ms-overflow-style: none;
    }

    .rail::-webkit-scrollbar {
      display: none;
    }

    .rail:has(> .col-12) {
      gap: var(--tw-layout-padding);
    }

    .page-wrapper {
      width: 100%;
      margin: 0 auto;
      padding-left: var(--tw-layout-padding);
      padding-right: var(--tw-layout-padding);
    }
    ");
}
