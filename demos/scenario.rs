use psi_core::analysis::{PsiAnalysis, SweepParameter, sweep};
use psi_core::config::load_case;
use psi_core::model::{Estimate, SurfaceType};
use psi_core::types::{DisplayDisplacement, DisplayLineLoad};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "cases/scenario_a.toml".to_string());

    let inputs = load_case(&path)?;
    println!("Loaded case: {}", path);

    let analysis = PsiAnalysis::run(&inputs)?;
    println!("{}", analysis.summary());

    if let Some(p50) = analysis.profile(SurfaceType::Concrete, Estimate::P50) {
        println!("Concrete P50 axial break: {} at {}",
            DisplayLineLoad(p50.axial.break_force),
            DisplayDisplacement(p50.axial.break_displacement));
    }

    // Embedment sensitivity
    let depths = [0.02, 0.05, 0.10, 0.15, 0.20, 0.30];
    for point in sweep(&inputs, SweepParameter::Embedment, &depths)? {
        let check = point.analysis.stability;
        println!("Z = {:.2} m: V = {:.2} kN/m, Qv = {:.2} kN/m ({})",
            point.value, check.v, check.qv,
            if check.is_stable() { "stable" } else { "UNSTABLE" });
    }

    Ok(())
}
