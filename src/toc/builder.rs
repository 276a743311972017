use crate::toc::heading::{HeadingCursor, HeadingElement};
use crate::toc::types::{ListItem, ListType, NestedList};

/// Build a nested list for a whole heading sequence
pub fn build_table_of_contents(list_type: ListType, headings: &[HeadingElement]) -> Option<NestedList> {
    let mut cursor = HeadingCursor::new(headings);
    build_nested_list(list_type, &mut cursor, 0)
}

/// Build the list holding every remaining heading deeper than `parent_level`
///
/// The first heading opens the list. A following heading at the same level,
/// or shallower than the previous one but still deeper than `parent_level`,
/// becomes a sibling. A deeper heading opens a sublist under the last item.
/// A heading at or above `parent_level` is pushed back and ends this list.
pub fn build_nested_list(
    list_type: ListType,
    cursor: &mut HeadingCursor<'_>,
    parent_level: u8,
) -> Option<NestedList> {
    let first = cursor.next()?;
    let mut list = NestedList::new(list_type);
    list.items.push(list_item(first));
    let mut previous_level = first.level().value();

    while cursor.has_next() {
        let Some(heading) = cursor.next() else { break };
        let current_level = heading.level().value();

        if current_level == previous_level
            || (current_level < previous_level && current_level > parent_level)
        {
            list.items.push(list_item(heading));
            previous_level = current_level;
        } else if current_level > previous_level {
            cursor.previous();
            let sublist = build_nested_list(list_type, cursor, previous_level);
            if let Some(last) = list.items.last_mut() {
                last.sublist = sublist;
            }
        } else {
            cursor.previous();
            return Some(list);
        }
    }

    Some(list)
}

/// Entry linking to `heading`, assigning the heading an id first if it has none
fn list_item(heading: &HeadingElement) -> ListItem {
    let id = heading.ensure_id();
    ListItem {
        href: format!("#{}", id),
        label: heading.text(),
        sublist: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::document::{list_to_node, parse_document};
    use kuchiki::NodeRef;

    fn headings(html: &str) -> (NodeRef, Vec<HeadingElement>) {
        let document = parse_document(html);
        let headings = document
            .select("h1, h2, h3, h4, h5, h6")
            .unwrap()
            .filter_map(HeadingElement::from_element)
            .collect();
        (document, headings)
    }

    fn labels(list: &NestedList) -> Vec<String> {
        list.items.iter().map(|item| item.label.clone()).collect()
    }

    #[test]
    fn test_empty_sequence_builds_nothing() {
        assert!(build_table_of_contents(ListType::Unordered, &[]).is_none());
    }

    #[test]
    fn test_flat_same_level() {
        let (_doc, found) = headings("<h3>One</h3><p>x</p><h3>Two</h3><h3>Three</h3>");
        let list = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(labels(&list), vec!["One", "Two", "Three"]);
        assert_eq!(list.depth(), 1);
        assert!(list.items.iter().all(|item| item.sublist.is_none()));
    }

    #[test]
    fn test_strict_descent_is_a_chain() {
        let (_doc, found) = headings("<h2>A</h2><h3>B</h3><h4>C</h4>");
        let list = build_table_of_contents(ListType::Ordered, &found).unwrap();

        assert_eq!(list.depth(), 3);
        assert_eq!(labels(&list), vec!["A"]);
        let second = list.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(second), vec!["B"]);
        let third = second.items[0].sublist.as_ref().unwrap();
        assert_eq!(labels(third), vec!["C"]);
        assert_eq!(third.list_type, ListType::Ordered);
    }

    #[test]
    fn test_level_gap_nests_directly() {
        let (_doc, found) = headings("<h2>Top</h2><h5>Deep</h5>");
        let list = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(list.depth(), 2);
        assert_eq!(labels(list.items[0].sublist.as_ref().unwrap()), vec!["Deep"]);
    }

    #[test]
    fn test_return_to_ancestor_level() {
        let (_doc, found) = headings("<h2>First</h2><h3>Child</h3><h2>Second</h2>");
        let list = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(labels(&list), vec!["First", "Second"]);
        assert_eq!(labels(list.items[0].sublist.as_ref().unwrap()), vec!["Child"]);
        assert!(list.items[1].sublist.is_none());
    }

    #[test]
    fn test_multi_level_pop() {
        let (_doc, found) = headings("<h2>A</h2><h3>B</h3><h4>C</h4><h2>D</h2><h3>E</h3>");
        let list = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(labels(&list), vec!["A", "D"]);
        assert_eq!(list.items[0].sublist.as_ref().unwrap().depth(), 2);
        assert_eq!(labels(list.items[1].sublist.as_ref().unwrap()), vec!["E"]);
        assert_eq!(list.entry_count(), 5);
    }

    #[test]
    fn test_skipped_intermediate_level_becomes_sibling() {
        // h3 comes back above the h4 but stays below the h2 parent
        let (_doc, found) = headings("<h2>A</h2><h4>B</h4><h3>C</h3>");
        let list = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(labels(&list), vec!["A"]);
        assert_eq!(labels(list.items[0].sublist.as_ref().unwrap()), vec!["B", "C"]);
    }

    #[test]
    fn test_first_heading_deeper_than_later_ones() {
        let (_doc, found) = headings("<h4>Deep</h4><h2>Top</h2><h3>Mid</h3>");
        let list = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(labels(&list), vec!["Deep", "Top"]);
        assert_eq!(labels(list.items[1].sublist.as_ref().unwrap()), vec!["Mid"]);
    }

    #[test]
    fn test_anchors_reference_ids() {
        let (document, found) = headings("<h2 id=\"kept\">Kept Id</h2><h2>Needs   An Id</h2>");
        let list = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(list.items[0].href, "#kept");
        assert_eq!(list.items[1].href, "#needs-an-id");
        assert_eq!(list.items[1].label, "Needs An Id");
        assert!(document.to_string().contains("<h2 id=\"needs-an-id\">"));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let (_doc, found) = headings("<h2>A b</h2><h4>C</h4><h3>D</h3><h2>E</h2>");
        let first = build_table_of_contents(ListType::Unordered, &found).unwrap();
        let second = build_table_of_contents(ListType::Unordered, &found).unwrap();

        assert_eq!(first, second);
        assert_eq!(list_to_node(&first).to_string(), list_to_node(&second).to_string());
    }
}
