//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for reorderable lists split into drop zones.
//! The gesture state lives in an explicit [`DragSession`] that every handler
//! receives, so nothing has to be recovered from the DOM by class name.
//!
//! Draggable elements must carry a `data-dnd-id` attribute holding their
//! numeric id; zones measure those elements to find the insertion point.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, DragEvent, Element, Node};

/// Attribute carrying the numeric id of a draggable element
pub const ITEM_ATTR: &str = "data-dnd-id";

/// Drag payload format
const PAYLOAD_FORMAT: &str = "text/plain";

/// Live relocation request emitted while hovering a zone
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMove<Z> {
    pub item_id: u32,
    pub zone: Z,
    /// Insert before this item; `None` appends at the end of the zone
    pub before: Option<u32>,
}

/// Final drop on a zone
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropCommit<Z> {
    pub item_id: u32,
    pub zone: Z,
}

/// State of one drag gesture (Idle when `dragging_id` is `None`)
#[derive(Clone, Copy)]
pub struct DragSession<Z: Send + Sync + 'static> {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    dragging_id_write: WriteSignal<Option<u32>>,
    /// Zone currently hovered, for highlighting
    pub over_zone_read: ReadSignal<Option<Z>>,
    over_zone_write: WriteSignal<Option<Z>>,
}

pub fn create_drag_session<Z>() -> DragSession<Z>
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_zone_read, over_zone_write) = signal(None::<Z>);
    DragSession {
        dragging_id_read,
        dragging_id_write,
        over_zone_read,
        over_zone_write,
    }
}

impl<Z> DragSession<Z>
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    /// Idle -> Dragging
    pub fn begin(&self, item_id: u32) {
        self.over_zone_write.set(None);
        self.dragging_id_write.set(Some(item_id));
    }

    /// Dragging -> Idle
    pub fn end(&self) {
        self.dragging_id_write.set(None);
        self.over_zone_write.set(None);
    }

    /// Reactive: is a gesture in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }

    pub fn is_dragging_item(&self, item_id: u32) -> bool {
        self.dragging_id_read.get() == Some(item_id)
    }

    pub fn is_over(&self, zone: Z) -> bool {
        self.over_zone_read.get() == Some(zone)
    }

    pub fn dragging_id_untracked(&self) -> Option<u32> {
        self.dragging_id_read.get_untracked()
    }

    fn hover(&self, zone: Z) {
        if self.over_zone_read.get_untracked() != Some(zone) {
            self.over_zone_write.set(Some(zone));
        }
    }

    /// Pointer left `zone`; a newer hover on another zone is kept
    fn leave(&self, zone: Z) {
        if self.over_zone_read.get_untracked() == Some(zone) {
            self.over_zone_write.set(None);
        }
    }

    /// Dropped: end the gesture and name the dropped item.
    /// The platform payload wins over the session's own record.
    fn finish(&self, payload: Option<u32>) -> Option<u32> {
        let item_id = payload.or_else(|| self.dragging_id_untracked());
        self.end();
        item_id
    }
}

/// Bind a document mousemove handler that ends a stale session.
///
/// `dragend` targets the drag source, and a source node that was re-rendered
/// into another zone is detached by the time the gesture ends. Browsers
/// suppress mouse events during a native drag, so the first mousemove seen
/// while a session is still active means the gesture is over.
pub fn bind_stale_session_reset<Z>(session: DragSession<Z>)
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if session.dragging_id_untracked().is_some() {
            session.end();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Pick the insert-before anchor for a pointer position.
///
/// `centers` holds `(id, vertical_center)` of every non-dragging item in the
/// zone. Among items whose center lies below the pointer (negative offset),
/// the one with the offset closest to zero wins; on equal offsets the first
/// one in `centers` is kept. `None` means append at the end.
pub fn find_insert_anchor(centers: &[(u32, f64)], pointer_y: f64) -> Option<u32> {
    let mut closest: Option<(u32, f64)> = None;
    for &(id, center) in centers {
        let offset = pointer_y - center;
        if offset < 0.0 && closest.map_or(true, |(_, best)| offset > best) {
            closest = Some((id, offset));
        }
    }
    closest.map(|(id, _)| id)
}

/// Parse the item id stored in the drag payload
pub fn parse_payload(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn read_payload(dt: &DataTransfer) -> Option<u32> {
    dt.get_data(PAYLOAD_FORMAT).ok().and_then(|raw| parse_payload(&raw))
}

/// Vertical centers of the draggable elements inside `zone`, skipping `skip`
fn measure_centers(zone: &Element, skip: u32) -> Vec<(u32, f64)> {
    let Ok(nodes) = zone.query_selector_all(&format!("[{}]", ITEM_ATTR)) else {
        return Vec::new();
    };
    let mut centers = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(id) = el.get_attribute(ITEM_ATTR).and_then(|v| parse_payload(&v)) else {
            continue;
        };
        if id == skip {
            continue;
        }
        let rect = el.get_bounding_client_rect();
        centers.push((id, rect.top() + rect.height() / 2.0));
    }
    centers
}

/// Create dragstart handler for a draggable item
/// Records the id in the session and in the platform payload
pub fn make_on_dragstart<Z>(session: DragSession<Z>, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data(PAYLOAD_FORMAT, &item_id.to_string());
            dt.set_effect_allowed("move");
        }
        session.begin(item_id);
    }
}

/// Create dragend handler (drag finished with or without a drop)
///
/// The last live relocation is left in place.
pub fn make_on_dragend<Z>(session: DragSession<Z>) -> impl Fn(DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        session.end();
    }
}

/// Create dragover handler for a zone
/// Permits dropping and emits the live insertion point
pub fn make_on_zone_dragover<Z>(
    session: DragSession<Z>,
    zone: Z,
    on_move: Callback<DragMove<Z>>,
) -> impl Fn(DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let Some(item_id) = session.dragging_id_untracked() else {
            return;
        };
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        session.hover(zone);

        let Some(zone_el) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let centers = measure_centers(&zone_el, item_id);
        let before = find_insert_anchor(&centers, ev.client_y() as f64);
        on_move.run(DragMove { item_id, zone, before });
    }
}

/// Create dragleave handler for a zone
pub fn make_on_zone_dragleave<Z>(session: DragSession<Z>, zone: Z) -> impl Fn(DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        // Moving onto a child of the zone also fires dragleave
        let zone_el = ev.current_target().and_then(|t| t.dyn_into::<Node>().ok());
        let entered = ev.related_target().and_then(|t| t.dyn_into::<Node>().ok());
        if let (Some(zone_el), Some(entered)) = (zone_el, entered) {
            if zone_el.contains(Some(&entered)) {
                return;
            }
        }
        session.leave(zone);
    }
}

/// Create drop handler for a zone
/// Reads the dragged id from the payload, falling back to the session
pub fn make_on_zone_drop<Z>(
    session: DragSession<Z>,
    zone: Z,
    on_drop: Callback<DropCommit<Z>>,
) -> impl Fn(DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = ev.data_transfer().and_then(|dt| read_payload(&dt));
        if let Some(item_id) = session.finish(payload) {
            on_drop.run(DropCommit { item_id, zone });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_nearest_item_below_pointer() {
        // centers at 10, 30, 50; pointer at 35 -> item 3 (offset -15)
        let centers = [(1, 10.0), (2, 30.0), (3, 50.0)];
        assert_eq!(find_insert_anchor(&centers, 35.0), Some(3));
    }

    #[test]
    fn test_anchor_above_first_item() {
        let centers = [(1, 10.0), (2, 30.0)];
        assert_eq!(find_insert_anchor(&centers, 0.0), Some(1));
    }

    #[test]
    fn test_append_when_pointer_below_everything() {
        let centers = [(1, 10.0), (2, 30.0)];
        assert_eq!(find_insert_anchor(&centers, 31.0), None);
    }

    #[test]
    fn test_pointer_exactly_on_center_is_not_above() {
        // offset 0 is not negative, so item 1 cannot be the anchor
        let centers = [(1, 10.0), (2, 30.0)];
        assert_eq!(find_insert_anchor(&centers, 10.0), Some(2));
    }

    #[test]
    fn test_empty_zone_appends() {
        assert_eq!(find_insert_anchor(&[], 42.0), None);
    }

    #[test]
    fn test_unsorted_centers() {
        let centers = [(7, 90.0), (8, 20.0), (9, 60.0)];
        assert_eq!(find_insert_anchor(&centers, 25.0), Some(9));
    }

    #[test]
    fn test_equal_offsets_keep_first() {
        let centers = [(4, 40.0), (5, 40.0)];
        assert_eq!(find_insert_anchor(&centers, 12.0), Some(4));
    }

    #[test]
    fn test_never_picks_item_above_pointer_when_one_is_below() {
        let layouts: &[&[(u32, f64)]] = &[
            &[(1, 5.0), (2, 15.0), (3, 25.0), (4, 35.0)],
            &[(1, 100.0), (2, 3.0), (3, 47.5)],
            &[(1, 12.0)],
        ];
        for centers in layouts {
            for pointer in [0.0, 4.0, 13.0, 26.0, 47.0, 48.0, 120.0] {
                let below: Vec<_> = centers.iter().filter(|(_, c)| pointer - c < 0.0).collect();
                match find_insert_anchor(centers, pointer) {
                    Some(id) => {
                        let (_, center) = centers.iter().find(|(i, _)| *i == id).unwrap();
                        assert!(*center > pointer);
                        let nearest = below.iter().map(|(_, c)| *c).fold(f64::INFINITY, f64::min);
                        assert_eq!(*center, nearest);
                    }
                    None => assert!(below.is_empty()),
                }
            }
        }
    }

    #[test]
    fn test_session_idle_dragging_idle() {
        let session = create_drag_session::<u8>();
        assert!(!session.is_dragging());

        session.begin(7);
        assert!(session.is_dragging());
        assert!(session.is_dragging_item(7));
        assert!(!session.is_dragging_item(8));
        assert_eq!(session.dragging_id_untracked(), Some(7));

        session.end();
        assert!(!session.is_dragging());
        assert_eq!(session.dragging_id_untracked(), None);
    }

    #[test]
    fn test_hover_moves_between_zones() {
        let session = create_drag_session::<u8>();
        session.begin(1);
        session.hover(0);
        assert!(session.is_over(0));

        session.hover(2);
        assert!(session.is_over(2));
        assert!(!session.is_over(0));

        // late dragleave from the previous zone keeps the new hover
        session.leave(0);
        assert!(session.is_over(2));
        session.leave(2);
        assert!(!session.is_over(2));
    }

    #[test]
    fn test_begin_and_end_clear_hover() {
        let session = create_drag_session::<u8>();
        session.begin(1);
        session.hover(1);
        session.end();
        assert!(!session.is_over(1));

        session.hover(2);
        session.begin(3);
        assert!(!session.is_over(2));
    }

    #[test]
    fn test_finish_prefers_payload_then_session() {
        let session = create_drag_session::<u8>();
        session.begin(4);
        assert_eq!(session.finish(Some(9)), Some(9));
        assert!(!session.is_dragging());

        session.begin(4);
        assert_eq!(session.finish(None), Some(4));
        assert!(!session.is_dragging());

        // drop from outside any gesture
        assert_eq!(session.finish(None), None);
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload("42"), Some(42));
        assert_eq!(parse_payload(" 7\n"), Some(7));
        assert_eq!(parse_payload(""), None);
        assert_eq!(parse_payload("abc"), None);
        assert_eq!(parse_payload("-1"), None);
    }
}
