//! Common test helpers shared across the test suite.

use std::fmt::Write;

/// Build CSV text from a header line and data rows.
pub fn csv(header: &str, rows: &[&str]) -> String {
    let mut text = String::new();
    writeln!(text, "{header}").ok();
    for row in rows {
        writeln!(text, "{row}").ok();
    }
    text
}

/// Synthesize a realistic capture log with `frames` data rows.
///
/// Frame times oscillate around 16.7 ms with a deterministic wobble so
/// derived statistics are stable across runs. Every metric family the
/// analyzer reads is populated.
#[allow(dead_code)]
pub fn synthetic_log(frames: usize) -> String {
    let mut text = String::from(
        "Application,GPU,CPU,Resolution,Runtime,\
         MsBetweenPresents,MsBetweenSimulationStart,MsInPresentAPI,\
         MsRenderPresentLatency,MsUntilDisplayed,Render Queue Depth,\
         MsPCLatency,Dropped,CPUClk(MHz),CPUUtil(%),CPU Package Temp(C),\
         CPU Package Power(W),CPU TDP (W),CPUCoreUtil%[0],CPUCoreUtil%[2],\
         GPU0Clk(MHz),GPU0MemClk(MHz),GPU0Util(%),GPU0Temp(C),\
         NV Pwr(W) (API)\n",
    );
    for i in 0..frames {
        let wobble = (i % 7) as f64 * 0.3;
        let frame_time = 16.0 + wobble;
        writeln!(
            text,
            "Quake,RTX 4080,Ryzen 7800X3D,2560x1440,DXGI,\
             {frame_time:.3},{:.3},1.2,3.4,20.1,1,32.5,0,4750,35.5,62.0,41.0,120,\
             {:.1},{:.1},2610,10500,97.0,64.0,245.0",
            frame_time + 0.2,
            25.0 + wobble * 4.0,
            80.0 + wobble,
        )
        .ok();
    }
    text
}
