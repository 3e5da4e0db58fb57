//! OptiRelief Headless Validation Harness
//!
//! Validates the pure decision-support logic against the sample scenario.
//! Runs entirely in-process — no DB, no networking, no HTTP layer.
//!
//! Usage:
//!   cargo run -p optirelief-simtest
//!   cargo run -p optirelief-simtest -- --verbose

use optirelief_logic::allocation::{allocate, SupplyItem};
use optirelief_logic::matching::{match_volunteers, Volunteer};
use optirelief_logic::priority::{rank, AffectedArea, RankingWeights};
use optirelief_logic::routing::{
    multi_center_dispatch, GraphEdge, LocationGraph, DEFAULT_MINUTES_PER_UNIT,
};
use optirelief_logic::triage::{triage, TriageConfig, UrgencyLevel};
use serde::Deserialize;

// ── Sample scenario (same JSON the integration tests use) ───────────────
const SCENARIO_JSON: &str = include_str!("../../../data/sample_scenario.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    areas: Vec<AffectedArea>,
    volunteers: Vec<Volunteer>,
    supplies: Vec<SupplyItem>,
    edges: Vec<GraphEdge>,
    regions: Vec<String>,
    centers: Vec<String>,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== OptiRelief Decision-Support Harness ===\n");

    let scenario: Scenario = match serde_json::from_str(SCENARIO_JSON) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("scenario parse error: {}", e);
            std::process::exit(1);
        }
    };

    let mut results = Vec::new();

    // 1. Priority ranking sweep
    results.extend(validate_ranking(&scenario, verbose));

    // 2. Routing over the location graph
    results.extend(validate_routing(&scenario, verbose));

    // 3. Multi-center dispatch planning
    results.extend(validate_dispatch(&scenario, verbose));

    // 4. Supply allocation
    results.extend(validate_allocation(&scenario, verbose));

    // 5. Volunteer matching
    results.extend(validate_matching(&scenario, verbose));

    // 6. Message triage
    results.extend(validate_triage(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Priority Ranking ─────────────────────────────────────────────────

fn validate_ranking(scenario: &Scenario, verbose: bool) -> Vec<TestResult> {
    println!("--- Priority Ranking ---");
    let mut results = Vec::new();
    let weights = RankingWeights::default();

    let ranked = rank(&scenario.areas, &weights);
    results.push(TestResult {
        name: "rank_preserves_count".into(),
        passed: ranked.len() == scenario.areas.len(),
        detail: format!("{} areas in, {} out", scenario.areas.len(), ranked.len()),
    });

    let descending = ranked
        .windows(2)
        .all(|pair| pair[0].urgency_score >= pair[1].urgency_score);
    results.push(TestResult {
        name: "rank_descending".into(),
        passed: descending,
        detail: "scores are non-increasing".into(),
    });

    results.push(TestResult {
        name: "rank_top_area".into(),
        passed: ranked
            .first()
            .map(|r| r.area.name == "Downtown District")
            .unwrap_or(false),
        detail: ranked
            .first()
            .map(|r| format!("top: {} at {:.2}", r.area.name, r.urgency_score))
            .unwrap_or_else(|| "no areas ranked".into()),
    });

    // Re-ranking the ranked output is a no-op.
    let rearranged: Vec<AffectedArea> = ranked.iter().map(|r| r.area.clone()).collect();
    let reranked = rank(&rearranged, &weights);
    results.push(TestResult {
        name: "rank_idempotent".into(),
        passed: reranked == ranked,
        detail: "ranking twice yields the same order and scores".into(),
    });

    if verbose {
        println!("  Ranked areas:");
        for r in &ranked {
            println!("    {:20} {:.2}", r.area.name, r.urgency_score);
        }
    }

    results
}

// ── 2. Routing ──────────────────────────────────────────────────────────

fn validate_routing(scenario: &Scenario, verbose: bool) -> Vec<TestResult> {
    println!("--- Routing ---");
    let mut results = Vec::new();
    let graph = LocationGraph::from_edges(&scenario.edges);

    results.push(TestResult {
        name: "graph_loads_all_nodes".into(),
        passed: graph.node_count() == 6,
        detail: format!("{} nodes from {} edges", graph.node_count(), scenario.edges.len()),
    });

    match graph.shortest_path("A", "E") {
        Ok(Some(route)) => {
            results.push(TestResult {
                name: "route_a_to_e".into(),
                passed: route.path == vec!["A", "B", "D", "E"] && route.total_distance == 24,
                detail: format!(
                    "path {:?}, distance {}, {} min",
                    route.path, route.total_distance, route.estimated_minutes
                ),
            });
            let step_sum: u32 = route.steps.iter().map(|s| s.distance).sum();
            results.push(TestResult {
                name: "route_steps_sum".into(),
                passed: step_sum == route.total_distance,
                detail: format!("steps sum {} == total {}", step_sum, route.total_distance),
            });
        }
        other => results.push(TestResult {
            name: "route_a_to_e".into(),
            passed: false,
            detail: format!("unexpected result: {:?}", other),
        }),
    }

    let same = graph.shortest_path("C", "C");
    results.push(TestResult {
        name: "route_same_node".into(),
        passed: matches!(&same, Ok(Some(r)) if r.total_distance == 0 && r.path.len() == 1),
        detail: "C→C is a zero-distance single-node route".into(),
    });

    results.push(TestResult {
        name: "route_unknown_node_rejected".into(),
        passed: graph.shortest_path("A", "Z").is_err(),
        detail: "Z is not in the graph".into(),
    });

    if verbose {
        for end in ["B", "C", "D", "E", "F"] {
            if let Ok(Some(route)) = graph.shortest_path("A", end) {
                println!(
                    "    A→{}: {:?} ({} units, {} min)",
                    end, route.path, route.total_distance, route.estimated_minutes
                );
            }
        }
    }

    results
}

// ── 3. Multi-Center Dispatch ────────────────────────────────────────────

fn validate_dispatch(scenario: &Scenario, verbose: bool) -> Vec<TestResult> {
    println!("--- Multi-Center Dispatch ---");
    let mut results = Vec::new();

    // A deterministic direct-distance matrix over the five centers.
    let n = scenario.centers.len();
    let matrix: Vec<Vec<u32>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0
                    } else {
                        // Symmetric synthetic distances, 10–34 units.
                        10 + ((i + j) * 7 % 25) as u32
                    }
                })
                .collect()
        })
        .collect();

    match multi_center_dispatch(&scenario.centers, &matrix, DEFAULT_MINUTES_PER_UNIT) {
        Ok(dispatch) => {
            results.push(TestResult {
                name: "dispatch_plan_per_center".into(),
                passed: dispatch.plans.len() == n,
                detail: format!("{} plans for {} centers", dispatch.plans.len(), n),
            });

            let relaxed_not_worse = (0..n).all(|i| {
                (0..n).all(|j| dispatch.cost_matrix[i][j] <= matrix[i][j])
            });
            results.push(TestResult {
                name: "dispatch_relaxation_improves".into(),
                passed: relaxed_not_worse,
                detail: "relaxed costs never exceed direct distances".into(),
            });

            results.push(TestResult {
                name: "dispatch_route_count".into(),
                passed: dispatch.routes.len() == n * (n - 1),
                detail: format!("{} ordered center pairs", dispatch.routes.len()),
            });

            if verbose {
                for plan in &dispatch.plans {
                    println!(
                        "    {:30} → {} destinations, {} min total",
                        plan.center,
                        plan.destinations.len(),
                        plan.total_minutes
                    );
                }
            }
        }
        Err(e) => results.push(TestResult {
            name: "dispatch_runs".into(),
            passed: false,
            detail: format!("dispatch failed: {}", e),
        }),
    }

    results
}

// ── 4. Supply Allocation ────────────────────────────────────────────────

fn validate_allocation(scenario: &Scenario, verbose: bool) -> Vec<TestResult> {
    println!("--- Supply Allocation ---");
    let mut results = Vec::new();

    for capacity in [0usize, 5, 10, 20, 40] {
        match allocate(&scenario.supplies, capacity) {
            Ok(alloc) => results.push(TestResult {
                name: format!("allocate_capacity_{}", capacity),
                passed: alloc.total_weight as usize <= capacity,
                detail: format!(
                    "{} items, weight {}/{}, utility {}, {:.0}% efficient",
                    alloc.selected.len(),
                    alloc.total_weight,
                    capacity,
                    alloc.total_utility,
                    alloc.efficiency_pct
                ),
            }),
            Err(e) => results.push(TestResult {
                name: format!("allocate_capacity_{}", capacity),
                passed: false,
                detail: format!("allocation failed: {}", e),
            }),
        }
    }

    // Utility is monotone over growing capacity.
    let mut monotone = true;
    let mut previous = 0;
    for capacity in 0..=40 {
        if let Ok(alloc) = allocate(&scenario.supplies, capacity) {
            if alloc.total_utility < previous {
                monotone = false;
            }
            previous = alloc.total_utility;
        }
    }
    results.push(TestResult {
        name: "allocate_monotone_utility".into(),
        passed: monotone,
        detail: "utility never drops as capacity grows".into(),
    });

    if verbose {
        if let Ok(alloc) = allocate(&scenario.supplies, 20) {
            println!("  Selection at capacity 20:");
            for item in &alloc.selected {
                println!("    {:16} w={} u={}", item.name, item.weight, item.utility);
            }
        }
    }

    results
}

// ── 5. Volunteer Matching ───────────────────────────────────────────────

fn validate_matching(scenario: &Scenario, verbose: bool) -> Vec<TestResult> {
    println!("--- Volunteer Matching ---");
    let mut results = Vec::new();

    let outcome = match_volunteers(&scenario.volunteers, &scenario.regions);

    results.push(TestResult {
        name: "match_within_bounds".into(),
        passed: outcome.assignments.len()
            <= scenario.volunteers.len().min(scenario.regions.len()),
        detail: format!(
            "{} assignments for {} volunteers / {} regions",
            outcome.assignments.len(),
            scenario.volunteers.len(),
            scenario.regions.len()
        ),
    });

    let mut ids: Vec<u32> = outcome.assignments.iter().map(|a| a.volunteer.id).collect();
    ids.sort_unstable();
    ids.dedup();
    results.push(TestResult {
        name: "match_no_double_assignment".into(),
        passed: ids.len() == outcome.assignments.len(),
        detail: "every assigned volunteer is unique".into(),
    });

    let rerun = match_volunteers(&scenario.volunteers, &scenario.regions);
    results.push(TestResult {
        name: "match_deterministic".into(),
        passed: rerun == outcome,
        detail: "re-running yields the identical outcome".into(),
    });

    results.push(TestResult {
        name: "match_coverage_accounting".into(),
        passed: outcome.unassigned_volunteers
            == scenario.volunteers.len() - outcome.assignments.len(),
        detail: format!(
            "coverage {}%, {} volunteers idle",
            outcome.coverage_pct, outcome.unassigned_volunteers
        ),
    });

    if verbose {
        for a in &outcome.assignments {
            println!(
                "    {:15} → {:28} (score {})",
                a.volunteer.name, a.region, a.match_score
            );
        }
    }

    results
}

// ── 6. Message Triage ───────────────────────────────────────────────────

fn validate_triage(verbose: bool) -> Vec<TestResult> {
    println!("--- Message Triage ---");
    let mut results = Vec::new();
    let config = TriageConfig::default();

    let samples = [
        (
            "URGENT: Building collapsed, people trapped inside. Need immediate rescue and medical help!",
            UrgencyLevel::High,
        ),
        (
            "Requesting blankets and water for the shelter when convenient",
            UrgencyLevel::Low,
        ),
        (
            "fire fire fire — severe danger, casualty reports, send ambulance, emergency, critical",
            UrgencyLevel::Critical,
        ),
    ];

    for (i, (text, expected)) in samples.iter().enumerate() {
        match triage(text, &config) {
            Ok(report) => results.push(TestResult {
                name: format!("triage_sample_{}", i),
                passed: report.urgency_level == *expected,
                detail: format!(
                    "score {} → {:?} (expected {:?}), keywords {:?}",
                    report.urgency_score, report.urgency_level, expected, report.keywords_found
                ),
            }),
            Err(e) => results.push(TestResult {
                name: format!("triage_sample_{}", i),
                passed: false,
                detail: format!("triage failed: {}", e),
            }),
        }
    }

    // Case invariance over the whole dictionary.
    let shouting = triage("FLOOD AND FIRE, INJURED PEOPLE, HELP", &config);
    let quiet = triage("flood and fire, injured people, help", &config);
    results.push(TestResult {
        name: "triage_case_invariant".into(),
        passed: matches!((&shouting, &quiet), (Ok(a), Ok(b)) if a.urgency_score == b.urgency_score),
        detail: "upper- and lowercase messages score identically".into(),
    });

    if verbose {
        if let Ok(report) = triage(samples[0].0, &config) {
            println!("    keywords: {:?}", report.keywords_found);
        }
    }

    results
}
