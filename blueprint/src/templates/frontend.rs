//! React frontend scaffold, generated under `frontend/`

/// `frontend/package.json`
pub const PACKAGE_JSON: &str = r#"{
  "name": "frontend",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "tsc -b && vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  },
  "devDependencies": {
    "@types/react": "^18.3.12",
    "@types/react-dom": "^18.3.1",
    "@vitejs/plugin-react": "^4.3.4",
    "typescript": "~5.6.2",
    "vite": "^6.0.1"
  }
}
"#;

/// `frontend/index.html`
pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{ProjectName}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

/// `frontend/src/main.tsx`
pub const MAIN_TSX: &str = r"import { StrictMode } from 'react'
import { createRoot } from 'react-dom/client'
import App from './App.tsx'

createRoot(document.getElementById('root')!).render(
  <StrictMode>
    <App />
  </StrictMode>,
)
";

/// `frontend/src/App.tsx`
pub const APP_TSX: &str = r"import { useState } from 'react'

function App() {
  const [message, setMessage] = useState<string>('')

  const fetchData = () => {
    fetch(`http://localhost:${import.meta.env.VITE_PORT}/`)
      .then((response) => response.text())
      .then((data) => setMessage(data))
      .catch((error) => console.error('Error fetching data:', error))
  }

  return (
    <div>
      <button onClick={fetchData}>Call backend</button>
      <p>{message}</p>
    </div>
  )
}

export default App
";

/// `frontend/.env`
pub const ENV: &str = r"VITE_PORT={Port}
";
