use desktop_runtime::{
    load_registry, reduce_desktop, render, AppId, DesktopAction, DesktopState, InteractionState,
    ReducerError, ResponsiveMode, RuntimeEffect, ScreenPoint, ViewportSize, WindowLifecycle,
    WindowTransform,
};
use futures::executor::block_on;
use platform_host::MemoryContentSource;
use pretty_assertions::assert_eq;
use rand::{rngs::SmallRng, SeedableRng};

const ABOUT_ONLY: &str = r#"{ "about": { "title": "About", "content": "<p>Hi</p>" } }"#;
const PORTFOLIO: &str = r#"{
    "about": { "title": "About", "content": "<p>Hi</p>" },
    "projects": { "title": "Projects", "content": "<ul></ul>", "subtitle": "Things I built" },
    "research": { "title": "Research", "content": "<p>Papers</p>" }
}"#;

struct Shell {
    state: DesktopState,
    interaction: InteractionState,
    rng: SmallRng,
    now_ms: u64,
}

impl Shell {
    fn new(document: &str) -> Self {
        let source = MemoryContentSource::default();
        source.insert("content.json", document);
        let (registry, errors) = block_on(load_registry(&source, "content.json"));
        assert!(errors.is_empty(), "registry errors: {errors:?}");

        let mut shell = Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
            rng: SmallRng::seed_from_u64(2024),
            now_ms: 0,
        };
        shell.dispatch(DesktopAction::RegistryLoaded { registry });
        shell
    }

    fn booted(document: &str) -> Self {
        let mut shell = Self::new(document);
        let effects = shell.dispatch(DesktopAction::StartBoot {
            surface_present: false,
        });
        assert!(effects.contains(&RuntimeEffect::BootCompleted));
        shell
    }

    fn try_dispatch(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        reduce_desktop(&mut self.state, &mut self.interaction, &mut self.rng, action)
    }

    fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        self.try_dispatch(action).expect("dispatch")
    }

    fn advance(&mut self, ms: u64) -> Vec<RuntimeEffect> {
        self.now_ms += ms;
        let now_ms = self.now_ms;
        self.dispatch(DesktopAction::Tick { now_ms })
    }

    fn lifecycle(&self, id: &str) -> WindowLifecycle {
        self.state.window(&AppId::from(id)).expect("window").lifecycle
    }
}

#[test]
fn about_window_round_trips_through_the_dock() {
    let mut shell = Shell::booted(ABOUT_ONLY);
    let about = AppId::from("about");

    shell.dispatch(DesktopAction::OpenWindow {
        app_id: about.clone(),
    });
    let window = shell.state.window(&about).unwrap();
    assert!(window.visible);
    assert_eq!(window.lifecycle, WindowLifecycle::Open);

    shell.dispatch(DesktopAction::MinimizeWindow {
        app_id: about.clone(),
        dock_target: Some(ScreenPoint { x: 640, y: 772 }),
    });
    shell.advance(shell.state.config.minimize_ms);
    let window = shell.state.window(&about).unwrap();
    assert!(!window.visible);
    assert_eq!(window.lifecycle, WindowLifecycle::Minimized);
    assert_eq!(window.transform, WindowTransform::Centered);
    assert!(!window.faded);

    shell.dispatch(DesktopAction::ActivateDockItem {
        app_id: about.clone(),
    });
    let window = shell.state.window(&about).unwrap();
    assert!(window.visible);
    assert_eq!(window.lifecycle, WindowLifecycle::Open);
    assert_eq!(window.transform, WindowTransform::Centered);
}

#[test]
fn opening_any_app_closes_every_other_one() {
    let mut shell = Shell::booted(PORTFOLIO);
    let ids = ["about", "projects", "research"];

    for id in ids {
        shell.dispatch(DesktopAction::OpenWindow {
            app_id: AppId::from(id),
        });
        for other in ids.iter().filter(|other| **other != id) {
            assert_eq!(shell.lifecycle(other), WindowLifecycle::Closed, "{other} after {id}");
        }
        assert_eq!(shell.lifecycle(id), WindowLifecycle::Open);
    }
}

#[test]
fn maximize_twice_restores_the_exact_geometry() {
    let mut shell = Shell::booted(PORTFOLIO);
    let projects = AppId::from("projects");
    shell.dispatch(DesktopAction::OpenWindow {
        app_id: projects.clone(),
    });
    let before = shell.state.window(&projects).unwrap().geometry;

    shell.dispatch(DesktopAction::ToggleMaximize {
        app_id: projects.clone(),
    });
    assert_eq!(shell.lifecycle("projects"), WindowLifecycle::Maximized);
    shell.dispatch(DesktopAction::ToggleMaximize {
        app_id: projects.clone(),
    });

    let window = shell.state.window(&projects).unwrap();
    assert_eq!(window.geometry, before);
    assert_eq!(window.saved_geometry, None);
}

#[test]
fn unresolved_dock_target_leaves_the_window_open() {
    let mut shell = Shell::booted(ABOUT_ONLY);
    let about = AppId::from("about");
    shell.dispatch(DesktopAction::OpenWindow {
        app_id: about.clone(),
    });

    let result = shell.try_dispatch(DesktopAction::MinimizeWindow {
        app_id: about.clone(),
        dock_target: None,
    });
    assert_eq!(result, Err(ReducerError::DockTargetUnresolved(about)));
    shell.advance(10_000);
    assert_eq!(shell.lifecycle("about"), WindowLifecycle::Open);
}

#[test]
fn closing_the_dismiss_layer_hides_all_windows() {
    let mut shell = Shell::booted(PORTFOLIO);
    shell.dispatch(DesktopAction::OpenWindow {
        app_id: AppId::from("research"),
    });
    shell.dispatch(DesktopAction::CloseAllWindows);

    assert!(shell.state.windows.iter().all(|w| !w.visible));
    assert_eq!(shell.state.active_window_id(), None);
}

#[test]
fn lock_gate_hides_the_shell_until_the_right_credential() {
    let mut shell = Shell::booted(ABOUT_ONLY);
    shell.dispatch(DesktopAction::OpenWindow {
        app_id: AppId::from("about"),
    });
    shell.dispatch(DesktopAction::Lock);

    let view = render::project_shell(&shell.state);
    assert!(view.lock_screen);
    assert!(!view.dock && !view.desktop_icons && !view.window_layer);

    shell.dispatch(DesktopAction::SetCredentialInput {
        value: "letmein".to_string(),
    });
    shell.dispatch(DesktopAction::SubmitCredential);
    let view = render::project_shell(&shell.state);
    assert!(view.lock_screen && view.lock_error);
    assert!(!view.window_layer);

    let credential = shell.state.config.unlock_credential.clone();
    shell.dispatch(DesktopAction::SetCredentialInput { value: credential });
    shell.dispatch(DesktopAction::SubmitCredential);
    let view = render::project_shell(&shell.state);
    assert!(!view.lock_screen);
    assert!(view.dock && view.desktop_icons && view.window_layer);
    assert_eq!(shell.lifecycle("about"), WindowLifecycle::Open);
}

#[test]
fn breakpoint_boundary_selects_the_layout() {
    let mut shell = Shell::booted(ABOUT_ONLY);
    shell.dispatch(DesktopAction::ViewportResized {
        viewport: ViewportSize {
            width: 767,
            height: 1024,
        },
    });
    assert_eq!(shell.state.mode, ResponsiveMode::Mobile);

    shell.dispatch(DesktopAction::ViewportResized {
        viewport: ViewportSize {
            width: 768,
            height: 1024,
        },
    });
    assert_eq!(shell.state.mode, ResponsiveMode::Desktop);
}

#[test]
fn mobile_pages_never_touch_window_state() {
    let mut shell = Shell::booted(PORTFOLIO);
    shell.dispatch(DesktopAction::ViewportResized {
        viewport: ViewportSize {
            width: 390,
            height: 844,
        },
    });
    let windows = shell.state.windows.clone();

    shell.dispatch(DesktopAction::OpenMobilePage {
        app_id: AppId::from("projects"),
    });
    assert_eq!(
        render::project_shell(&shell.state).mobile_page,
        Some(AppId::from("projects"))
    );
    assert_eq!(shell.state.windows, windows);
}

#[test]
fn full_boot_gates_interaction_until_it_completes() {
    let mut shell = Shell::new(ABOUT_ONLY);
    let effects = shell.dispatch(DesktopAction::StartBoot {
        surface_present: true,
    });
    assert!(matches!(effects.as_slice(), [RuntimeEffect::ArmTimer { .. }]));
    assert_eq!(
        shell.try_dispatch(DesktopAction::OpenWindow {
            app_id: AppId::from("about"),
        }),
        Err(ReducerError::ShellNotReady)
    );

    let mut completions = 0;
    for _ in 0..2_000 {
        completions += shell
            .advance(50)
            .iter()
            .filter(|effect| **effect == RuntimeEffect::BootCompleted)
            .count();
    }
    assert_eq!(completions, 1);
    assert!(shell.state.boot.completed);
    assert!(!render::project_shell(&shell.state).boot_overlay);

    shell.dispatch(DesktopAction::OpenWindow {
        app_id: AppId::from("about"),
    });
    assert_eq!(shell.lifecycle("about"), WindowLifecycle::Open);
}

#[test]
fn terminal_open_command_opens_the_window() {
    let mut shell = Shell::booted(PORTFOLIO);
    shell.dispatch(DesktopAction::SetTerminalInput {
        value: "open about".to_string(),
    });
    let effects = shell.dispatch(DesktopAction::SubmitTerminal);

    assert!(effects.contains(&RuntimeEffect::FocusTerminalInput));
    assert_eq!(shell.lifecycle("about"), WindowLifecycle::Open);
}
