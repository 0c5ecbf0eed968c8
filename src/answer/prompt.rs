use crate::generation::Message;

const SOURCES_SYSTEM_PROMPT: &str = "אתה עורך דין מומחה בישראל.\n\n\
חוקים בלתי משתנים - הפרה של כל אחד מהם היא שגיאה קריטית:\n\
1. **אסור לכתוב אף מילה באנגלית!**\n\
2. **אסור לכתוב משפטי הקדמה באנגלית!**\n\
3. **אסור לחזור על התשובה!**\n\
4. **אסור לכלול את השאלה בתשובה!**\n\
5. התבסס רק על המסמכים.\n\
6. חובה לציין מקורות.\n\
7. אם אין מידע – אמור זאת.\n\
8. התמודד עם טקסט הפוך/משובש.\n\
9. כתוב עברית מקצועית.\n";

const NO_SOURCES_SYSTEM_PROMPT: &str = "אתה עורך דין מומחה בישראל.\n\
לא נמצאו מסמכים רלוונטיים.\n\
ענה בעברית בלבד ולא באנגלית.\n";

/// Builds the system and user messages for one question.
///
/// With `num_sources > 0` the context is embedded in the user turn under a source count
/// header; otherwise the model is told nothing relevant was found.
pub fn build_messages(question: &str, context_text: &str, num_sources: usize) -> Vec<Message> {
    if num_sources > 0 {
        let user = format!(
            "{question}\n\nמקורות מידע מהמאגר ({num_sources} מסמכים):\n{context_text}\n\nענה ישירות בעברית בלבד."
        );
        vec![Message::system(SOURCES_SYSTEM_PROMPT), Message::user(user)]
    } else {
        let user = format!("{question}\n\nלא נמצאו מסמכים רלוונטיים לשאלה זו.\n");
        vec![Message::system(NO_SOURCES_SYSTEM_PROMPT), Message::user(user)]
    }
}
