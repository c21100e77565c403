use tokio::runtime::Builder;
use tokio::task::LocalSet;
use yew::html::BaseComponent;
use yew::LocalServerRenderer;

/// Renders a component to plain HTML without a browser.
pub fn render_html<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime");
    LocalSet::new().block_on(
        &runtime,
        LocalServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render(),
    )
}
