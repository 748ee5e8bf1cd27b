use peelfx::{Evaluator, PhaseSchedule, SheetLayout, SheetSpec, Size, overlay_bounds};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let spec = SheetSpec::new(20, Size::new(200.0, 200.0))?;
    let layout = SheetLayout::new(spec)?;
    let schedule = PhaseSchedule::default();

    println!("snapshot plan: {:?}", layout.snapshot_plan());
    println!("overlay bounds: {:?}", overlay_bounds(&spec));

    // One cycle at 60 ticks/sec, 0.3 cycles/sec, like a display-link host.
    let dt: f64 = 1.0 / 60.0 * 0.3;
    let steps = (1.0 / dt).ceil() as usize;
    let mut t = 0.0;
    for _ in 0..steps {
        let state = Evaluator::eval_clock(&layout, &schedule, t)?;
        let lifted = state
            .segments
            .iter()
            .filter(|s| s.z_position > 1e-9)
            .count();
        println!(
            "t={t:.3} phase={:?} fraction={:.3} dir={:?} lifted={lifted}/20",
            schedule.phase(t),
            state.fraction,
            state.direction,
        );
        t = PhaseSchedule::advance(t, dt);
    }

    // Full dump of one mid-peel frame for inspection.
    let state = Evaluator::eval_clock(&layout, &schedule, 0.15)?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
