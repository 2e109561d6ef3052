use bodycopy::{
    default_cascade, extract_with_options, link_density, node_is_sufficient, Error, Extractor,
    OptionSet, Params,
};
use bodycopy::dom;

const PARA: &str = "A plain sentence of average length, written for the tests.";

#[test]
fn default_cascade_is_tried_in_declared_order() {
    let cascade = default_cascade();
    assert!(cascade[0].strip_unlikely_candidates);
    assert!(!cascade[1].strip_unlikely_candidates);
    assert!(cascade[1].weight_nodes);
    assert!(!cascade[2].weight_nodes);
    assert!(cascade[2].clean_conditionally);
    assert!(!cascade[3].clean_conditionally);
}

#[test]
fn exhausted_cascade_reports_attempt_count_and_best_text() {
    let html = format!("<html><body><div><p>{PARA}</p></div></body></html>");

    let extraction = Extractor::new().extract(&Params::new(&html), None);

    assert!(!extraction.sufficient);
    assert_eq!(extraction.attempts, default_cascade().len());
    assert_eq!(extraction.text, PARA);
}

#[test]
fn custom_cascade_controls_the_attempts() {
    let html = format!("<html><body><div><p>{PARA}</p></div></body></html>");
    let permissive_only = vec![OptionSet {
        strip_unlikely_candidates: false,
        weight_nodes: false,
        clean_conditionally: false,
    }];

    let extractor = match Extractor::with_cascade(permissive_only) {
        Ok(e) => e,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    let extraction = extractor.extract(&Params::new(&html), None);

    assert_eq!(extraction.attempts, 1);
    assert!(!extraction.options.weight_nodes);
    assert_eq!(extraction.text, PARA);
}

#[test]
fn empty_cascade_is_a_configuration_error() {
    match Extractor::with_cascade(Vec::new()) {
        Err(Error::EmptyCascade) => {}
        other => panic!("expected Err(EmptyCascade), got {other:?}"),
    }
}

#[test]
fn fallback_prefers_highest_scoring_candidate_across_attempts() {
    // Block A survives every attempt but scores low. Block B scores much
    // higher yet is stripped by the first attempt and never sufficient.
    // The exhausted cascade must return B, the best candidate seen anywhere.
    let html = r#"<html><body>
        <div id="a"><p>Tiny words here now.</p></div>
        <div class="sponsor"><p>one, two, three, four, five, six, seven,
        eight, nine, ten, eleven, twelve, today.</p></div>
        </body></html>"#;

    let extraction = Extractor::new().extract(&Params::new(html), None);

    assert!(!extraction.sufficient);
    assert!(extraction.text.contains("eleven"));
    assert!(!extraction.text.contains("Tiny"));
}

#[test]
fn caller_options_do_not_replace_the_cascade() {
    // Strict caller options fail on this document; the cascade still runs
    // afterwards and recovers the content.
    let sentence = "Recovered prose, still worth reading after the cascade relaxes.";
    let para = [sentence; 3].join(" ");
    let html = format!(
        r#"<html><body><div class="sponsor-slot"><p>{para}</p></div></body></html>"#
    );

    let requested = OptionSet::default();
    let extraction = extract_with_options(&html, requested);

    assert!(extraction.sufficient);
    assert!(!extraction.options.strip_unlikely_candidates);
    assert!(extraction.text.contains("Recovered prose"));
}

#[test]
fn winning_option_set_carries_the_cleaning_flag() {
    let sentence = "This is a substantive sentence with meaningful words, written out.";
    let para = [sentence; 3].join(" ");
    let html = format!(r#"<html><body><article><p>{para}</p></article></body></html>"#);

    let extraction = Extractor::new().extract(&Params::new(&html), None);

    assert!(extraction.sufficient);
    // First attempt wins, so conditional cleaning is still requested.
    assert!(extraction.options.clean_conditionally);
}

#[test]
fn sufficiency_judge_is_reusable_on_extraction_results() {
    let html = format!("<html><body><div><p>{PARA}</p></div></body></html>");
    let extraction = Extractor::new().extract(&Params::new(&html), None);

    // Callers can re-judge the fallback text themselves.
    let wrapper = format!("<html><body><div>{}</div></body></html>", extraction.text);
    let doc = dom::parse(&wrapper);
    assert!(!node_is_sufficient(&doc.select("div")));
}

#[test]
fn link_density_is_exposed_for_downstream_cleaning() {
    let doc = dom::parse(
        r#"<html><body><ul id="nav">
        <li><a href="/a">First section</a></li>
        <li><a href="/b">Second section</a></li>
        </ul></body></html>"#,
    );

    let density = link_density(&doc.select("#nav"));
    assert!(density > 0.9);
}
