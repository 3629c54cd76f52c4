//! Iterator: walk a collection without knowing its shape
//!
//! One iterator abstraction over an array-backed and a linked-list-backed
//! shelf of books, plus reverse and filtered traversals. Closes with the
//! std::iter equivalent, since Rust bakes this pattern into the language.
//!
//! Run with: cargo run --bin behavioral_03_iterator

use colored::Colorize;

// ============================================================================
// The classic shape: has_next / next behind traits
// ============================================================================

mod shelf {
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Book {
        pub title: String,
        pub author: String,
    }

    impl Book {
        pub fn new(title: &str, author: &str) -> Self {
            Book {
                title: title.to_string(),
                author: author.to_string(),
            }
        }
    }

    pub trait BookIterator {
        fn has_next(&self) -> bool;
        fn next_book(&mut self) -> Option<Book>;
    }

    pub trait BookCollection {
        fn create_iterator(&self) -> Box<dyn BookIterator + '_>;
    }

    // Array-backed collection.

    pub struct ArrayShelf {
        books: Vec<Book>,
    }

    impl ArrayShelf {
        pub fn with_classics() -> Self {
            ArrayShelf {
                books: vec![
                    Book::new("The Rust Programming Language", "Klabnik"),
                    Book::new("Design Patterns", "Gang of Four"),
                    Book::new("Clean Code", "Martin"),
                ],
            }
        }

        pub fn add(&mut self, book: Book) {
            self.books.push(book);
        }

        pub fn books(&self) -> &[Book] {
            &self.books
        }
    }

    pub struct ArrayIterator<'a> {
        books: &'a [Book],
        index: usize,
    }

    impl BookIterator for ArrayIterator<'_> {
        fn has_next(&self) -> bool {
            self.index < self.books.len()
        }

        fn next_book(&mut self) -> Option<Book> {
            let book = self.books.get(self.index).cloned();
            if book.is_some() {
                self.index += 1;
            }
            book
        }
    }

    impl BookCollection for ArrayShelf {
        fn create_iterator(&self) -> Box<dyn BookIterator + '_> {
            Box::new(ArrayIterator {
                books: &self.books,
                index: 0,
            })
        }
    }

    // Linked-list-backed collection with the very same client surface.

    struct Node {
        book: Book,
        next: Option<Rc<Node>>,
    }

    pub struct LinkedShelf {
        head: Option<Rc<Node>>,
    }

    impl LinkedShelf {
        pub fn with_classics() -> Self {
            let mut shelf = LinkedShelf { head: None };
            // Pushing to the front reverses insertion order, an internal
            // detail the iterator abstraction hides from clients.
            shelf.push_front(Book::new("Clean Code", "Martin"));
            shelf.push_front(Book::new("Design Patterns", "Gang of Four"));
            shelf.push_front(Book::new("The Rust Programming Language", "Klabnik"));
            shelf
        }

        pub fn push_front(&mut self, book: Book) {
            self.head = Some(Rc::new(Node {
                book,
                next: self.head.take(),
            }));
        }
    }

    pub struct LinkedIterator {
        current: Option<Rc<Node>>,
    }

    impl BookIterator for LinkedIterator {
        fn has_next(&self) -> bool {
            self.current.is_some()
        }

        fn next_book(&mut self) -> Option<Book> {
            let node = self.current.take()?;
            self.current = node.next.clone();
            Some(node.book.clone())
        }
    }

    impl BookCollection for LinkedShelf {
        fn create_iterator(&self) -> Box<dyn BookIterator + '_> {
            Box::new(LinkedIterator {
                current: self.head.clone(),
            })
        }
    }

    // Alternative traversals over the array shelf.

    pub struct ReverseIterator<'a> {
        books: &'a [Book],
        remaining: usize,
    }

    impl<'a> ReverseIterator<'a> {
        pub fn new(books: &'a [Book]) -> Self {
            ReverseIterator {
                books,
                remaining: books.len(),
            }
        }
    }

    impl BookIterator for ReverseIterator<'_> {
        fn has_next(&self) -> bool {
            self.remaining > 0
        }

        fn next_book(&mut self) -> Option<Book> {
            if self.remaining == 0 {
                return None;
            }
            self.remaining -= 1;
            self.books.get(self.remaining).cloned()
        }
    }

    pub struct FilteredIterator<'a> {
        books: &'a [Book],
        author: String,
        index: usize,
    }

    impl<'a> FilteredIterator<'a> {
        pub fn by_author(books: &'a [Book], author: &str) -> Self {
            let mut iterator = FilteredIterator {
                books,
                author: author.to_string(),
                index: 0,
            };
            iterator.skip_to_match();
            iterator
        }

        fn skip_to_match(&mut self) {
            while self
                .books
                .get(self.index)
                .is_some_and(|b| b.author != self.author)
            {
                self.index += 1;
            }
        }
    }

    impl BookIterator for FilteredIterator<'_> {
        fn has_next(&self) -> bool {
            self.index < self.books.len()
        }

        fn next_book(&mut self) -> Option<Book> {
            let book = self.books.get(self.index).cloned()?;
            self.index += 1;
            self.skip_to_match();
            Some(book)
        }
    }
}

// ============================================================================
// Demo helpers and the std::iter comparison
// ============================================================================

use shelf::{ArrayShelf, Book, BookCollection, BookIterator, FilteredIterator, LinkedShelf, ReverseIterator};

fn print_collection(collection: &dyn BookCollection, label: &str) {
    println!("  {}:", label);
    let mut iterator = collection.create_iterator();
    let mut position = 1;
    while let Some(book) = iterator.next_book() {
        println!("    {}. \"{}\" by {}", position, book.title, book.author);
        position += 1;
    }
}

fn demonstrate_uniform_access() {
    println!("{}", "--- One Client, Two Collections ---".green().bold());

    let array_shelf = ArrayShelf::with_classics();
    let linked_shelf = LinkedShelf::with_classics();

    // Identical client code; the storage layout never leaks.
    print_collection(&array_shelf, "array-backed shelf");
    print_collection(&linked_shelf, "linked-list shelf");
    println!();
}

fn demonstrate_concurrent_iterators() {
    println!("{}", "--- Two Iterators, One Shelf ---".green().bold());

    let shelf = ArrayShelf::with_classics();
    let mut first = shelf.create_iterator();
    let mut second = shelf.create_iterator();

    // Each iterator keeps its own cursor.
    println!("  first:  {:?}", first.next_book().map(|b| b.title));
    println!("  second: {:?}", second.next_book().map(|b| b.title));
    println!("  first:  {:?}", first.next_book().map(|b| b.title));
    println!();
}

fn demonstrate_alternative_traversals() {
    println!("{}", "--- Reverse and Filtered ---".green().bold());

    let mut shelf = ArrayShelf::with_classics();
    shelf.add(Book::new("Effective Modern C++", "Meyers"));
    shelf.add(Book::new("Effective STL", "Meyers"));

    let mut reverse = ReverseIterator::new(shelf.books());
    println!("  newest first:");
    while let Some(book) = reverse.next_book() {
        println!("    \"{}\"", book.title);
    }

    let mut by_meyers = FilteredIterator::by_author(shelf.books(), "Meyers");
    println!("  by Meyers only:");
    while let Some(book) = by_meyers.next_book() {
        println!("    \"{}\"", book.title);
    }
    println!();
}

fn demonstrate_native_iterators() {
    println!("{}", "--- The std::iter Version ---".green().bold());

    // Rust ships the pattern as the Iterator trait; adapters replace the
    // hand-written reverse and filtered iterators.
    let shelf = ArrayShelf::with_classics();
    let titles: Vec<&str> = shelf
        .books()
        .iter()
        .rev()
        .map(|b| b.title.as_str())
        .collect();
    println!("  reversed via .iter().rev(): {:?}", titles);
    println!();
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Clients traverse through the iterator trait, never the storage");
    println!("2. Swapping array for linked list changes zero client lines");
    println!("3. Independent cursors allow concurrent traversals");
    println!("4. In real Rust, implement std::iter::Iterator and the whole");
    println!("   adapter ecosystem comes along for free");
}

fn main() {
    println!("{}", "ITERATOR PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    demonstrate_uniform_access();
    demonstrate_concurrent_iterators();
    demonstrate_alternative_traversals();
    demonstrate_native_iterators();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::shelf::{
        ArrayShelf, Book, BookCollection, BookIterator, FilteredIterator, LinkedShelf,
        ReverseIterator,
    };

    fn drain(mut iterator: Box<dyn BookIterator + '_>) -> Vec<String> {
        let mut titles = Vec::new();
        while let Some(book) = iterator.next_book() {
            titles.push(book.title);
        }
        titles
    }

    #[test]
    fn both_collections_yield_the_same_sequence() {
        let array_shelf = ArrayShelf::with_classics();
        let linked_shelf = LinkedShelf::with_classics();
        assert_eq!(
            drain(array_shelf.create_iterator()),
            drain(linked_shelf.create_iterator())
        );
    }

    #[test]
    fn iterators_keep_independent_cursors() {
        let shelf = ArrayShelf::with_classics();
        let mut first = shelf.create_iterator();
        let mut second = shelf.create_iterator();

        let a = first.next_book().expect("book");
        let b = second.next_book().expect("book");
        assert_eq!(a, b);

        first.next_book();
        // second is still one step behind first.
        assert!(second.has_next());
    }

    #[test]
    fn reverse_iterator_walks_backwards() {
        let shelf = ArrayShelf::with_classics();
        let mut reverse = ReverseIterator::new(shelf.books());
        let mut titles = Vec::new();
        while let Some(book) = reverse.next_book() {
            titles.push(book.title);
        }
        assert_eq!(titles.first().map(String::as_str), Some("Clean Code"));
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn filtered_iterator_only_yields_matching_authors() {
        let mut shelf = ArrayShelf::with_classics();
        shelf.add(Book::new("Effective Modern C++", "Meyers"));
        shelf.add(Book::new("Effective STL", "Meyers"));

        let mut filtered = FilteredIterator::by_author(shelf.books(), "Meyers");
        let mut count = 0;
        while let Some(book) = filtered.next_book() {
            assert_eq!(book.author, "Meyers");
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn filtered_iterator_handles_no_matches() {
        let shelf = ArrayShelf::with_classics();
        let mut filtered = FilteredIterator::by_author(shelf.books(), "Nobody");
        assert!(!filtered.has_next());
        assert!(filtered.next_book().is_none());
    }
}
