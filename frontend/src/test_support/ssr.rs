use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

struct ResourceLoadGuard;

impl ResourceLoadGuard {
    fn suppress() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for ResourceLoadGuard {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Runs `f` with resource fetchers disabled, for view models that own queries.
pub fn with_idle_resources<T>(f: impl FnOnce() -> T) -> T {
    let _guard = ResourceLoadGuard::suppress();
    with_runtime(f)
}

/// Renders without running resource fetchers, so queries stay in their loading state.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_idle_resources(|| view().into_view().render_to_string().to_string())
}
