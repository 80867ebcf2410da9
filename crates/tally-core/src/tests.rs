//! End-to-End Scenario Tests
//!
//! Drive the coordinator over a headless surface the way a user would.

#[cfg(test)]
mod tests {
    use crate::{Coordinator, Entry, EntryStore, Mode, Surface};

    fn setup() -> Coordinator<Surface> {
        let mut coordinator = Coordinator::new(EntryStore::new(), Surface::new());
        coordinator.init();
        coordinator
    }

    fn add(coordinator: &mut Coordinator<Surface>, name: &str, quantity: &str) -> Option<Entry> {
        coordinator.view_mut().type_input(name, quantity);
        coordinator.on_add()
    }

    #[test]
    fn test_eggs_cookie_scenario() {
        let mut app = setup();
        add(&mut app, "Eggs", "300").unwrap();
        add(&mut app, "Cookie", "400").unwrap();
        assert_eq!(app.store().total(), 700);
        assert_eq!(app.view().total, 700);

        app.on_edit(0);
        app.on_delete().unwrap();
        assert_eq!(app.store().list(), &[Entry::new(1, "Cookie", 400)]);
        assert_eq!(app.store().total(), 400);
        assert_eq!(app.view().rows, vec![Entry::new(1, "Cookie", 400)]);

        app.on_clear();
        assert!(app.store().list().is_empty());
        assert_eq!(app.store().total(), 0);
        assert_eq!(app.view().total, 0);
    }

    #[test]
    fn test_edit_cancel_cycle() {
        let mut app = setup();
        add(&mut app, "Eggs", "300").unwrap();
        add(&mut app, "Cookie", "400").unwrap();
        assert_eq!(app.view().mode(), Mode::Normal);

        app.on_edit(1);
        assert_eq!(app.view().mode(), Mode::Editing);
        assert_eq!(app.view().name_field, "Cookie");

        app.on_cancel();
        let surface = app.view();
        assert_eq!(surface.mode(), Mode::Normal);
        assert!(surface.controls.add);
        assert!(!surface.controls.update);
        assert!(!surface.controls.delete);
        assert!(!surface.controls.back);
        assert!(surface.name_field.is_empty());
        assert!(surface.quantity_field.is_empty());
    }

    #[test]
    fn test_view_mirrors_store_through_mixed_actions() {
        let mut app = setup();
        for (name, qty) in [("Eggs", "300"), ("Cookie", "400"), ("Toast", "90"), ("Soup", "abc")] {
            add(&mut app, name, qty).unwrap();
        }

        app.on_edit(2);
        app.view_mut().type_input("Rye Toast", "110");
        app.on_update().unwrap();

        app.on_edit(0);
        app.on_delete().unwrap();

        add(&mut app, "Apple", "95").unwrap();

        assert_eq!(app.view().rows, app.store().list());
        assert_eq!(app.view().total, app.store().total());
        assert_eq!(app.store().total(), 400 + 110 + 95);

        let ids: Vec<_> = app.store().list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ids_strictly_increase_across_adds() {
        let mut app = setup();
        let mut last = None;
        for i in 0..20 {
            let entry = add(&mut app, &format!("Item {}", i), "1").unwrap();
            if let Some(prev) = last {
                assert!(entry.id > prev);
            } else {
                assert_eq!(entry.id, 0);
            }
            last = Some(entry.id);
        }
    }

    #[test]
    fn test_deleting_everything_then_adding() {
        let mut app = setup();
        add(&mut app, "Eggs", "300").unwrap();
        app.on_edit(0);
        app.on_delete().unwrap();
        assert!(!app.view().list_visible);

        let entry = add(&mut app, "Cookie", "400").unwrap();
        assert_eq!(entry.id, 0);
        assert!(app.view().list_visible);
    }
}
