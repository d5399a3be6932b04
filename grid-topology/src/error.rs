error_chain! {
    links {
        // The doc comments have to be put after the item in this macro.
        EdgeListIOError(crate::io::edge_list::Error, crate::io::edge_list::ErrorKind)
        /// A wrapper for errors thrown by edge list IO.
        ;
    }
}
