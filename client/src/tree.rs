use leptos::prelude::*;

// Leaf particles drifting down the stage. Position, timing and size are
// varied per index so the loop doesn't read as a pattern.
const LEAF_COUNT: usize = 10;
const LEAF_COLORS: [&str; 4] = ["#34D399", "#6EE7B7", "#FBBF24", "#A7F3D0"];

/// Decorative tree behind the system nodes. Purely visual: the interactive
/// nodes are positioned over it by the home page, so everything here is
/// pointer-transparent.
#[component]
pub fn TreeBackdrop() -> impl IntoView {
    let leaves = (0..LEAF_COUNT)
        .map(|i| {
            let left_pct = 12.0 + (i as f64 * 8.3) % 76.0;
            let delay_s = (i as f64 * 1.3) % 7.0;
            let duration_s = 7.0 + (i % 4) as f64 * 1.5;
            let size_px = 5.0 + (i % 3) as f64 * 2.0;
            let color = LEAF_COLORS[i % LEAF_COLORS.len()];
            let style = format!(
                "left:{left_pct:.1}%;width:{size_px}px;height:{size_px}px;background:{color};\
                 animation-delay:{delay_s:.1}s;animation-duration:{duration_s:.1}s;"
            );
            view! { <span class="leaf" style=style /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="tree-backdrop"
            style="position:absolute;inset:0;pointer-events:none;overflow:hidden;"
        >
            <svg
                viewBox="0 0 800 860"
                preserveAspectRatio="xMidYMax meet"
                style="position:absolute;inset:0;width:100%;height:100%;"
            >
                <defs>
                    <linearGradient id="trunk-grad" x1="0" y1="1" x2="0" y2="0">
                        <stop offset="0" stop-color="#3A2D1E" />
                        <stop offset="0.6" stop-color="#55402B" />
                        <stop offset="1" stop-color="#6B5138" />
                    </linearGradient>
                    <radialGradient id="canopy-glow" cx="0.5" cy="0.45" r="0.6">
                        <stop offset="0" stop-color="rgba(52, 211, 153, 0.30)" />
                        <stop offset="1" stop-color="rgba(52, 211, 153, 0)" />
                    </radialGradient>
                </defs>

                // Roots fanning out of frame at the bottom
                <g stroke="#3A2D1E" stroke-width="14" stroke-linecap="round" fill="none">
                    <path d="M400 830 C 340 850, 280 852, 210 858" />
                    <path d="M400 830 C 450 852, 520 854, 590 860" />
                    <path d="M400 830 C 395 845, 380 856, 360 862" />
                </g>

                // Trunk, slightly tapered, with a soft pulsing glow
                <path
                    class="tree-trunk"
                    d="M376 836 C 380 640, 372 500, 388 330 L 412 330 C 428 500, 420 640, 424 836 Z"
                    fill="url(#trunk-grad)"
                />

                // Branch pair carrying the two canopy-level nodes
                <g
                    stroke="#55402B"
                    stroke-width="18"
                    stroke-linecap="round"
                    fill="none"
                >
                    <path class="tree-branch sway-slow" d="M394 360 C 330 320, 260 300, 175 290" />
                    <path class="tree-branch sway-slower" d="M406 360 C 470 318, 545 298, 625 288" />
                </g>

                // Canopy clusters; each sways on its own phase
                <g>
                    <ellipse class="tree-canopy sway-slow" cx="400" cy="220" rx="215" ry="130" fill="rgba(16, 185, 129, 0.16)" />
                    <ellipse class="tree-canopy sway-slower" cx="305" cy="265" rx="150" ry="95" fill="rgba(52, 211, 153, 0.13)" />
                    <ellipse class="tree-canopy sway-slowest" cx="505" cy="260" rx="150" ry="95" fill="rgba(110, 231, 183, 0.11)" />
                    <ellipse cx="400" cy="240" rx="260" ry="170" fill="url(#canopy-glow)" />
                </g>
            </svg>

            {leaves}
        </div>
    }
}
