use oedipus_core::model::SectionId;

/// Reports section geometry back to Rust on every scroll and resize.
///
/// The promise never resolves: the script keeps posting snapshots through
/// `dioxus.send` for as long as the page is mounted.
pub(super) fn scroll_bridge_script(sections: &[SectionId]) -> String {
    let ids = sections
        .iter()
        .map(|id| format!("{:?}", id.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"(function() {{
                const ids = [{ids}];
                const measure = () => {{
                    const sections = [];
                    for (const id of ids) {{
                        const el = document.getElementById(id);
                        if (!el) continue;
                        sections.push({{ id, top: el.offsetTop, height: el.offsetHeight }});
                    }}
                    dioxus.send({{
                        scroll_y: window.scrollY,
                        viewport_height: window.innerHeight,
                        sections,
                    }});
                }};
                let queued = false;
                const schedule = () => {{
                    if (queued) return;
                    queued = true;
                    requestAnimationFrame(() => {{
                        queued = false;
                        measure();
                    }});
                }};
                window.addEventListener("scroll", schedule, {{ passive: true }});
                window.addEventListener("resize", schedule);
                measure();
            }})();
            await new Promise(() => {{}});"#
    )
}

pub(super) fn scroll_into_view_script(section: SectionId) -> String {
    format!(
        "document.getElementById({:?})?.scrollIntoView({{ behavior: 'smooth' }});",
        section.as_str()
    )
}
