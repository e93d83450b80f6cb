use tbcalc_rs::{
    exercise::Exercise,
    gym::Gym,
    one_rep_max::OneRepMax,
    units,
    week::{Week, WeekPercentages},
    workout::plan_warmups,
};

fn pounds_list(weights: &[u32]) -> Vec<String> {
    weights.iter().map(|w| units::display(*w)).collect()
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let exercise: Exercise = args.next().as_deref().unwrap_or("squat").parse()?;
    let one_rep_max: OneRepMax = args.next().as_deref().unwrap_or("400").parse()?;

    println!("=== Warm-up progression for {exercise}, 1RM {one_rep_max} ===\n");

    let gym = Gym::default();
    let percentages = WeekPercentages::default();

    for week in Week::all() {
        let working = percentages.working_weight(week, one_rep_max.weight());
        let plan = plan_warmups(&gym, exercise, working);

        println!(
            "Week {week} ({}), working {}",
            percentages.label(week),
            units::display(plan.working)
        );
        println!("  raw:       {:?}", pounds_list(&plan.raw));
        println!("  optimized: {:?}", pounds_list(&plan.optimized));
        println!("  adjusted:  {:?}", pounds_list(&plan.adjusted));

        let sequence: Vec<u32> = plan.adjusted.iter().copied().chain([plan.working]).collect();
        for pair in sequence.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from > to || !gym.is_additive(from, to) {
                println!(
                    "  ❌ {} -> {}: {} -> {}",
                    units::display(from),
                    units::display(to),
                    gym.decompose(from),
                    gym.decompose(to)
                );
            }
        }
        println!();
    }

    Ok(())
}
