use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;

/// How long the overlay stays fully opaque after mount.
pub const HOLD_MS: u32 = 2000;
/// Length of the opacity transition once fading starts.
pub const FADE_MS: u32 = 1000;
/// Staggered bounce offsets for the three loading dots.
pub const DOT_DELAYS_MS: [u32; 3] = [0, 200, 400];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashState {
    Visible,
    FadingOut,
    Removed,
}

impl SplashState {
    /// State `elapsed_ms` after mount. Removed is terminal.
    pub fn at(elapsed_ms: u32) -> Self {
        if elapsed_ms < HOLD_MS {
            SplashState::Visible
        } else if elapsed_ms < HOLD_MS + FADE_MS {
            SplashState::FadingOut
        } else {
            SplashState::Removed
        }
    }

    /// Elapsed time at which this state gives way to the next one.
    pub fn ends_at(self) -> Option<u32> {
        match self {
            SplashState::Visible => Some(HOLD_MS),
            SplashState::FadingOut => Some(HOLD_MS + FADE_MS),
            SplashState::Removed => None,
        }
    }

    /// Opacity the overlay is rendered with; the CSS transition animates the
    /// drop from 1 to 0 over `FADE_MS`.
    pub fn target_opacity(self) -> f64 {
        match self {
            SplashState::Visible => 1.0,
            SplashState::FadingOut | SplashState::Removed => 0.0,
        }
    }
}

/// When the next timer has to fire, `None` once the overlay is gone.
pub fn next_milestone(elapsed_ms: u32) -> Option<u32> {
    SplashState::at(elapsed_ms).ends_at()
}

/// Inline style of the overlay at `elapsed_ms`, `None` when nothing renders.
pub fn overlay_style(elapsed_ms: u32) -> Option<String> {
    match SplashState::at(elapsed_ms) {
        SplashState::Removed => None,
        state => Some(format!(
            "opacity: {}; transition: opacity {}ms ease-out;",
            state.target_opacity(),
            FADE_MS,
        )),
    }
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let elapsed = use_state(|| 0u32);

    {
        let setter = elapsed.setter();
        use_effect_with_deps(
            move |elapsed: &u32| {
                let elapsed = *elapsed;
                let timeout = next_milestone(elapsed).map(|milestone| {
                    Timeout::new(milestone - elapsed, move || {
                        debug!(
                            "Splash {:?} -> {:?}",
                            SplashState::at(elapsed),
                            SplashState::at(milestone)
                        );
                        setter.set(milestone);
                    })
                });

                // Dropping the handle cancels a timer that has not fired yet
                move || drop(timeout)
            },
            *elapsed,
        );
    }

    let Some(style) = overlay_style(*elapsed) else {
        return html! {};
    };

    html! {
        <div class="loading-screen" style={style}>
            <div class="loading-content">
                <div class="loading-brand">
                    <div class="loading-glow"></div>
                    <h1 class="loading-title">{"ScriptSolutions"}</h1>
                </div>
                <div class="loading-dots">
                    { for DOT_DELAYS_MS.iter().map(|delay| html! {
                        <div class="loading-dot" style={format!("animation-delay: {}ms;", delay)}></div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    background: #020304;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .loading-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                }
                .loading-brand {
                    position: relative;
                }
                .loading-glow {
                    position: absolute;
                    inset: -4px;
                    background: linear-gradient(to right, #012677, #3b82f6);
                    border-radius: 8px;
                    filter: blur(8px);
                    opacity: 0.75;
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .loading-title {
                    position: relative;
                    background: #020304;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 3rem;
                    font-weight: 700;
                    color: #60a5fa;
                }
                .loading-dots {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .loading-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: #012677;
                    animation: bounce 1s infinite;
                }
                @keyframes pulse {
                    50% { opacity: 0.4; }
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                    50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                }
                @media (max-width: 768px) {
                    .loading-title {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_and_opaque() {
        assert_eq!(SplashState::at(0), SplashState::Visible);
        assert_eq!(SplashState::at(HOLD_MS - 1), SplashState::Visible);
        let style = overlay_style(0).unwrap();
        assert!(style.starts_with("opacity: 1;"));
    }

    #[test]
    fn fade_starts_at_two_seconds_as_a_transition_to_zero() {
        for t in [HOLD_MS, HOLD_MS + 500, HOLD_MS + FADE_MS - 1] {
            assert_eq!(SplashState::at(t), SplashState::FadingOut);
            let style = overlay_style(t).unwrap();
            assert!(style.starts_with("opacity: 0;"), "unexpected style at {}ms: {}", t, style);
            assert!(style.contains("transition: opacity 1000ms ease-out"));
        }
    }

    #[test]
    fn removed_after_fade_and_stays_removed() {
        for t in [3000, 3001, 10_000, u32::MAX] {
            assert_eq!(SplashState::at(t), SplashState::Removed);
            assert_eq!(overlay_style(t), None);
            assert_eq!(next_milestone(t), None);
        }
    }

    #[test]
    fn timers_walk_the_timeline_forward_only() {
        let mut elapsed = 0;
        let mut seen = vec![SplashState::at(elapsed)];
        while let Some(milestone) = next_milestone(elapsed) {
            assert!(milestone > elapsed);
            elapsed = milestone;
            seen.push(SplashState::at(elapsed));
        }
        assert_eq!(elapsed, 3000);
        assert_eq!(
            seen,
            vec![SplashState::Visible, SplashState::FadingOut, SplashState::Removed]
        );
    }

    #[test]
    fn milestone_from_inside_a_phase_targets_its_end() {
        assert_eq!(next_milestone(500), Some(HOLD_MS));
        assert_eq!(next_milestone(2500), Some(HOLD_MS + FADE_MS));
    }

    #[test]
    fn dots_are_staggered() {
        assert_eq!(DOT_DELAYS_MS, [0, 200, 400]);
    }
}
